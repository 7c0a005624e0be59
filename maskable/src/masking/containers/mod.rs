//! Maskable implementations for standard library types.
//!
//! Strings are the leaves. Every other implementation walks its contents and
//! masks each element, so containers nest freely
//! (`Vec<Option<String>>`, `BTreeMap<u32, Vec<String>>`, ...).
//!
//! ## Map Keys Are Not Masked
//!
//! For map containers (`HashMap`, `BTreeMap`), only **values** are masked.
//! Keys are cloned unchanged to preserve hashing/ordering invariants and key
//! identity, whatever the key type.
//!
//! ## Set Masking Can Collapse Elements
//!
//! For set containers (`HashSet`, `BTreeSet`), each element is masked and the
//! results are collected into a new set. If two elements mask to the same
//! output the resulting set is smaller than the input.

mod maps;
mod sets;
mod strings;
mod wrappers;
