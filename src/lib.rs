#![doc = include_str!("./doc.md")]
#![no_std]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

use core::fmt;
use core::fmt::{Debug, Formatter};

pub use error::BadAccess;

use crate::storage::Storage;

mod error;
mod storage;

#[doc = include_str!("./doc.md")]
pub struct Optional<T> {
    storage: Storage<T>,
    has_value: bool,
}

impl<T> Optional<T> {
    /// Constructs an empty optional.
    ///
    /// No `T` is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let optional = Optional::<String>::new();
    /// assert!(!optional.has_value());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: Storage::vacant(),
            has_value: false,
        }
    }

    /// Constructs an optional holding `value`.
    ///
    /// To copy a borrowed value in, see [`from_ref`](Optional::from_ref).
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let optional = Optional::from_value(5);
    /// assert_eq!(optional.value(), Ok(&5));
    /// ```
    pub const fn from_value(value: T) -> Self {
        Self {
            storage: Storage::occupied(value),
            has_value: true,
        }
    }

    /// Constructs an optional holding a clone of `value`.
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_value(value.clone())
    }

    /// Returns `true` if the optional holds a value.
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// Returns a reference to the value, assuming there is one.
    ///
    /// No check is made in release builds.
    /// Prefer [`value`](Optional::value) unless the check is known to be redundant.
    ///
    /// # Safety
    ///
    /// The optional must hold a value, see [`has_value`](Optional::has_value).
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let optional = Optional::from_value("foo");
    ///
    /// if optional.has_value() {
    ///     let value = unsafe { optional.get_unchecked() };
    ///     assert_eq!(value, &"foo");
    /// }
    /// ```
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.has_value, "unchecked access to an empty optional");
        self.storage.get()
    }

    /// Returns a mutable reference to the value, assuming there is one.
    ///
    /// See [`get_unchecked`](Optional::get_unchecked) for more information.
    ///
    /// # Safety
    ///
    /// The optional must hold a value, see [`has_value`](Optional::has_value).
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value, "unchecked access to an empty optional");
        self.storage.get_mut()
    }

    /// Returns a reference to the value, or [`BadAccess`] if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::{BadAccess, Optional};
    /// let mut optional = Optional::from_value(5);
    /// assert_eq!(optional.value(), Ok(&5));
    ///
    /// optional.reset();
    /// assert_eq!(optional.value(), Err(BadAccess));
    /// ```
    pub fn value(&self) -> Result<&T, BadAccess> {
        if !self.has_value {
            return Err(BadAccess);
        }

        unsafe { Ok(self.storage.get()) }
    }

    /// Returns a mutable reference to the value, or [`BadAccess`] if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::{BadAccess, Optional};
    /// fn shout(optional: &mut Optional<String>) -> Result<(), BadAccess> {
    ///     optional.value_mut()?.push('!');
    ///     Ok(())
    /// }
    ///
    /// let mut optional = Optional::from_value(String::from("hey"));
    /// shout(&mut optional)?;
    /// assert_eq!(optional.value().map(String::as_str), Ok("hey!"));
    ///
    /// assert_eq!(shout(&mut Optional::new()), Err(BadAccess));
    /// # Ok::<(), BadAccess>(())
    /// ```
    pub fn value_mut(&mut self) -> Result<&mut T, BadAccess> {
        if !self.has_value {
            return Err(BadAccess);
        }

        unsafe { Ok(self.storage.get_mut()) }
    }

    /// Borrows the value as an [`Option`].
    pub fn as_option(&self) -> Option<&T> {
        self.value().ok()
    }

    /// Mutably borrows the value as an [`Option`].
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.value_mut().ok()
    }

    /// Converts the optional into an [`Option`], moving the value out.
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    /// Moves the value out into a new optional, leaving this one empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut source = Optional::from_value(vec![1, 2, 3]);
    /// let moved = source.take();
    ///
    /// assert!(!source.has_value());
    /// assert_eq!(moved.value(), Ok(&vec![1, 2, 3]));
    /// ```
    pub fn take(&mut self) -> Self {
        self.take_value().into()
    }

    /// Assigns `value` to the optional.
    ///
    /// If the optional already holds a value, that value is assigned over in place.
    /// Otherwise a new value is constructed in the optional's storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut optional = Optional::new();
    ///
    /// optional.assign("foo");
    /// assert_eq!(optional.value(), Ok(&"foo"));
    ///
    /// optional.assign("bar");
    /// assert_eq!(optional.value(), Ok(&"bar"));
    /// ```
    pub fn assign(&mut self, value: T) -> &mut T {
        if !self.has_value {
            return unsafe { self.fill(value) };
        }

        unsafe {
            let current = self.storage.get_mut();
            *current = value;
            current
        }
    }

    /// Assigns a clone of `value` to the optional.
    ///
    /// Like [`assign`](Optional::assign), but an existing value is updated with [`Clone::clone_from`],
    /// which lets it reuse its own resources.
    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if !self.has_value {
            return unsafe { self.fill(value.clone()) };
        }

        unsafe {
            let current = self.storage.get_mut();
            current.clone_from(value);
            current
        }
    }

    /// Moves the state of `source` into this optional, leaving `source` empty.
    ///
    /// If `source` is empty, this optional's value (if any) is dropped.
    /// Otherwise the value is assigned over in place as in [`assign`](Optional::assign).
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut destination = Optional::from_value(1);
    /// let mut source = Optional::from_value(2);
    ///
    /// destination.move_from(&mut source);
    /// assert_eq!(destination.value(), Ok(&2));
    /// assert!(!source.has_value());
    ///
    /// destination.move_from(&mut source);
    /// assert!(!destination.has_value());
    /// ```
    pub fn move_from(&mut self, source: &mut Self) {
        match source.take_value() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Drops the value, if any, leaving the optional empty.
    ///
    /// Calling this on an empty optional does nothing.
    pub fn reset(&mut self) {
        if self.has_value {
            self.has_value = false;

            unsafe {
                self.storage.drop_in_place();
            }
        }
    }

    /// Replaces the contents of the optional with `value`.
    ///
    /// Unlike [`assign`](Optional::assign), an existing value is always dropped rather than assigned over.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut optional = Optional::from_value(String::from("old"));
    /// optional.emplace(String::from("new"));
    /// assert_eq!(optional.value().map(String::as_str), Ok("new"));
    /// ```
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        unsafe { self.fill(value) }
    }

    /// Replaces the contents of the optional with a value constructed by `f`.
    ///
    /// The existing value, if any, is dropped before `f` is called.
    /// If `f` panics, the optional is left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut optional = Optional::from_value(Vec::<u8>::new());
    /// optional.emplace_with(|| Vec::with_capacity(16));
    /// assert!(optional.value().unwrap().capacity() >= 16);
    /// ```
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = f();
        unsafe { self.fill(value) }
    }

    /// Replaces the contents of the optional with a value constructed by the fallible `f`.
    ///
    /// The existing value, if any, is dropped before `f` is called.
    /// If `f` returns an error, the optional is left empty and the error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_optional::Optional;
    /// let mut optional = Optional::from_value(0u8);
    ///
    /// let result = optional.try_emplace_with(|| "300".parse::<u8>());
    /// assert!(result.is_err());
    /// assert!(!optional.has_value());
    ///
    /// optional.try_emplace_with(|| "200".parse::<u8>())?;
    /// assert_eq!(optional.value(), Ok(&200));
    /// # Ok::<(), std::num::ParseIntError>(())
    /// ```
    pub fn try_emplace_with<E, F>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        let value = f()?;
        unsafe { Ok(self.fill(value)) }
    }

    // Preconditions:
    // * !has_value
    unsafe fn fill(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value);

        self.storage.write(value);
        self.has_value = true;
        self.storage.get_mut()
    }

    fn take_value(&mut self) -> Option<T> {
        if !self.has_value {
            return None;
        }

        self.has_value = false;
        unsafe { Some(self.storage.take()) }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::from_ref(value),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match source.as_option() {
            Some(value) => {
                self.assign_cloned(value);
            }
            None => self.reset(),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

/// Converts an [`Option`] into an optional holding the same value, if any.
///
/// Since `Option<T>` also converts into `Optional<Option<T>>` through `From<T>`,
/// the target type must be named.
///
/// # Examples
///
/// ```
/// # use inplace_optional::Optional;
/// let optional = Optional::<i32>::from(Some(3));
/// assert_eq!(optional.value(), Ok(&3));
///
/// let nested = Optional::<Option<i32>>::from(Some(3));
/// assert_eq!(nested.value(), Ok(&Some(3)));
/// ```
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Full").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}
