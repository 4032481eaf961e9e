use bitflags::bitflags;

bitflags! {
    /// Flags indicating structural properties of a type.
    ///
    /// These flags are computed once when a type is allocated and cached
    /// so that queries such as "is this a nested array" don't need a
    /// recursive walk.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TyFlags: u8 {
        /// The type is an array or contains one.
        const HAS_ARRAY = 1;
        /// An array type appears as the element of another array.
        const NESTED_ARRAY = 1 << 1;
    }
}
