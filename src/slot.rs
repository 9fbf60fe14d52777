//! Access to the bound sequences, one slot at a time and as a tuple.
//!
//! [`Slot`] is the contract one bound sequence must satisfy: a length, shared
//! element access by offset, and a lifetime-shortening reborrow. [`SlotMut`]
//! extends it with in-place access. Borrowed slices, `Vec`s and arrays all
//! qualify; a `&mut` binding gets both traits, a `&` binding only the first.
//!
//! [`Slots`] and [`SlotsMut`] lift the same contract to a fixed-arity tuple
//! of slots, which is exactly what a [`Zip`] binds. The tuple impls are
//! generated for arities 1 to 8.
//!
//! [`Zip`]: super::Zip

use super::apply::{usize_for, ApplyRef, UnaryRef};
use super::cursor::Position;

/// One bound sequence: borrowed, ordered, indexable storage.
///
/// A slot never owns its elements. `Ref` shortens the borrow (and drops
/// mutability), so a slot tuple can be lent out shared without giving up the
/// original binding.
pub trait Slot {
    /// The element type.
    type Item;

    /// The shared view of this slot, at a shorter lifetime.
    type Ref<'s>: Slot<Item = Self::Item> where Self: 's;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Borrow the element at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of range.
    fn get(&self, offset: usize) -> &Self::Item;

    /// Reborrow this slot shared.
    fn reborrow(&self) -> Self::Ref<'_>;
}

/// A [`Slot`] with in-place element access.
pub trait SlotMut: Slot {
    /// The mutable view of this slot, at a shorter lifetime.
    type Mut<'s>: SlotMut<Item = Self::Item> where Self: 's;

    /// Mutably borrow the element at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of range.
    fn get_mut(&mut self, offset: usize) -> &mut Self::Item;

    /// Exchange the elements at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Reborrow this slot mutable.
    fn reborrow_mut(&mut self) -> Self::Mut<'_>;
}

// ----------------------------------------------------------------------------

impl<'a, T> Slot for &'a [T] {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { <[T]>::len(self) }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self }
}

impl<'a, T> Slot for &'a mut [T] {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { <[T]>::len(self) }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self }
}

impl<'a, T> SlotMut for &'a mut [T] {
    type Mut<'s> = &'s mut [T] where Self: 's;

    fn get_mut(&mut self, offset: usize) -> &mut T { &mut self[offset] }
    fn swap(&mut self, a: usize, b: usize) { <[T]>::swap(self, a, b); }
    fn reborrow_mut(&mut self) -> &mut [T] { self }
}

impl<'a, T> Slot for &'a Vec<T> {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { Vec::len(self) }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self.as_slice() }
}

impl<'a, T> Slot for &'a mut Vec<T> {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { Vec::len(self) }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self.as_slice() }
}

impl<'a, T> SlotMut for &'a mut Vec<T> {
    type Mut<'s> = &'s mut [T] where Self: 's;

    fn get_mut(&mut self, offset: usize) -> &mut T { &mut self[offset] }
    fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    fn reborrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, const N: usize> Slot for &'a [T; N] {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { N }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, const N: usize> Slot for &'a mut [T; N] {
    type Item = T;
    type Ref<'s> = &'s [T] where Self: 's;

    fn len(&self) -> usize { N }
    fn get(&self, offset: usize) -> &T { &self[offset] }
    fn reborrow(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, const N: usize> SlotMut for &'a mut [T; N] {
    type Mut<'s> = &'s mut [T] where Self: 's;

    fn get_mut(&mut self, offset: usize) -> &mut T { &mut self[offset] }
    fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    fn reborrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

// ----------------------------------------------------------------------------

/// Produces a slot's start offset. Applied across a slot tuple, it builds
/// the begin position.
pub(crate) struct Origin;

impl<S: Slot> UnaryRef<S> for Origin {
    type Output = usize;
    fn call(&mut self, _: &S) -> usize { 0 }
}

/// Produces a slot's one-past-the-last offset. Applied across a slot tuple,
/// it builds the end position.
pub(crate) struct Extent;

impl<S: Slot> UnaryRef<S> for Extent {
    type Output = usize;
    fn call(&mut self, slot: &S) -> usize { slot.len() }
}

// ----------------------------------------------------------------------------

/// A fixed-arity tuple of [`Slot`]s: the reference set a [`Zip`] binds.
///
/// [`Zip`]: super::Zip
pub trait Slots {
    /// The per-slot offset tuple for this arity.
    type Position: Position;

    /// The tuple of element value types.
    type Item;

    /// The shared dereference view: one `&Item` per slot.
    type Refs<'s> where Self: 's;

    /// The tuple of shared slot reborrows.
    type Shared<'s>: Slots<Position = Self::Position, Item = Self::Item>
    where Self: 's;

    /// The position of every slot's start.
    fn origin(&self) -> Self::Position;

    /// The position one past every slot's last element.
    fn extent(&self) -> Self::Position;

    /// Borrow the element at `position` in every slot.
    ///
    /// # Panics
    ///
    /// Panics if any offset of `position` is out of range for its slot.
    fn at(&self, position: &Self::Position) -> Self::Refs<'_>;

    /// Reborrow every slot shared.
    fn reborrow(&self) -> Self::Shared<'_>;
}

/// A [`Slots`] tuple whose every slot is a [`SlotMut`].
pub trait SlotsMut: Slots {
    /// The mutable dereference view: one `&mut Item` per slot.
    type Muts<'s> where Self: 's;

    /// The tuple of mutable slot reborrows.
    type Reborrowed<'s>: SlotsMut<Position = Self::Position, Item = Self::Item>
    where Self: 's;

    /// Mutably borrow the element at `position` in every slot.
    ///
    /// # Panics
    ///
    /// Panics if any offset of `position` is out of range for its slot.
    fn at_mut(&mut self, position: &Self::Position) -> Self::Muts<'_>;

    /// Assign `values` through the element at `position`, slot by slot in
    /// index order.
    fn set(&mut self, position: &Self::Position, values: Self::Item);

    /// Exchange the elements at `a` and `b` in every slot.
    fn swap(&mut self, a: &Self::Position, b: &Self::Position);

    /// Reborrow every slot mutable.
    fn reborrow_mut(&mut self) -> Self::Reborrowed<'_>;
}

macro_rules! impl_slots {
    ($($A:ident $x:ident $y:ident $z:ident),*) => {
        impl<$($A: Slot),*> Slots for ($($A,)*) {
            type Position = ($(usize_for!($x),)*);
            type Item = ($($A::Item,)*);
            type Refs<'s> = ($(&'s $A::Item,)*) where Self: 's;
            type Shared<'s> = ($($A::Ref<'s>,)*) where Self: 's;

            fn origin(&self) -> Self::Position { self.apply_ref(&mut Origin) }

            fn extent(&self) -> Self::Position { self.apply_ref(&mut Extent) }

            fn at(&self, position: &Self::Position) -> Self::Refs<'_> {
                let ($($x,)*) = self;
                let ($($y,)*) = position;
                ($($x.get(*$y),)*)
            }

            fn reborrow(&self) -> Self::Shared<'_> {
                let ($($x,)*) = self;
                ($($x.reborrow(),)*)
            }
        }

        impl<$($A: SlotMut),*> SlotsMut for ($($A,)*) {
            type Muts<'s> = ($(&'s mut $A::Item,)*) where Self: 's;
            type Reborrowed<'s> = ($($A::Mut<'s>,)*) where Self: 's;

            fn at_mut(&mut self, position: &Self::Position) -> Self::Muts<'_> {
                let ($($x,)*) = self;
                let ($($y,)*) = position;
                ($($x.get_mut(*$y),)*)
            }

            fn set(&mut self, position: &Self::Position, values: Self::Item) {
                let ($($x,)*) = self;
                let ($($y,)*) = position;
                let ($($z,)*) = values;
                $( *$x.get_mut(*$y) = $z; )*
            }

            fn swap(&mut self, a: &Self::Position, b: &Self::Position) {
                let ($($x,)*) = self;
                let ($($y,)*) = a;
                let ($($z,)*) = b;
                $( $x.swap(*$y, *$z); )*
            }

            fn reborrow_mut(&mut self) -> Self::Reborrowed<'_> {
                let ($($x,)*) = self;
                ($($x.reborrow_mut(),)*)
            }
        }
    };
}

impl_slots!(A0 x0 y0 z0);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2, A3 x3 y3 z3);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2, A3 x3 y3 z3, A4 x4 y4 z4);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2, A3 x3 y3 z3, A4 x4 y4 z4, A5 x5 y5 z5);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2, A3 x3 y3 z3, A4 x4 y4 z4, A5 x5 y5 z5, A6 x6 y6 z6);
impl_slots!(A0 x0 y0 z0, A1 x1 y1 z1, A2 x2 y2 z2, A3 x3 y3 z3, A4 x4 y4 z4, A5 x5 y5 z5, A6 x6 y6 z6, A7 x7 y7 z7);

// ----------------------------------------------------------------------------
