use core::mem::ManuallyDrop;

/// Inline storage for at most one `T`.
///
/// The slot does not know whether it is occupied, the owner tracks that.
pub(crate) union Storage<T> {
    occupied: ManuallyDrop<T>,
    vacant: (),
}

static_assertions::assert_eq_size!(Storage<u64>, u64);
static_assertions::assert_eq_align!(Storage<u64>, u64);
static_assertions::assert_eq_size!(Storage<[u8; 3]>, [u8; 3]);
static_assertions::assert_eq_align!(Storage<u128>, u128);

impl<T> Storage<T> {
    pub const fn vacant() -> Self {
        Self { vacant: () }
    }

    pub const fn occupied(value: T) -> Self {
        Self {
            occupied: ManuallyDrop::new(value),
        }
    }

    // Preconditions:
    // * occupied
    pub unsafe fn get(&self) -> &T {
        &self.occupied
    }

    // Preconditions:
    // * occupied
    pub unsafe fn get_mut(&mut self) -> &mut T {
        &mut self.occupied
    }

    // Preconditions:
    // * vacant (an occupant would be leaked)
    pub unsafe fn write(&mut self, value: T) {
        *self = Self::occupied(value);
    }

    // Preconditions:
    // * occupied
    // Postconditions:
    // * vacant
    pub unsafe fn take(&mut self) -> T {
        let value = ManuallyDrop::take(&mut self.occupied);
        *self = Self::vacant();
        value
    }

    // Preconditions:
    // * occupied
    // Postconditions:
    // * the occupant is dead, also when its destructor unwinds; the owner must treat the slot as vacant
    pub unsafe fn drop_in_place(&mut self) {
        ManuallyDrop::drop(&mut self.occupied);
    }
}
