// Typed arena indices into the registry's collections.
//
// Records are never removed from the registry, so a key handed out by a
// registry stays valid for that registry's lifetime.

macro_rules! key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            pub(crate) const fn new(index: usize) -> Self {
                Self(index)
            }

            pub(crate) const fn index(self) -> usize {
                self.0
            }

            /// The 1-based position of the record in its collection.
            #[must_use]
            pub const fn position(self) -> usize {
                self.0 + 1
            }
        }
    };
}

key! {
    /// A reference to a [`Student`](crate::Student) held by a
    /// [`Registry`](crate::Registry).
    StudentKey
}

key! {
    /// A reference to a [`Teacher`](crate::Teacher) held by a
    /// [`Registry`](crate::Registry).
    TeacherKey
}

key! {
    /// A reference to a [`Course`](crate::Course) held by a
    /// [`Registry`](crate::Registry).
    CourseKey
}
