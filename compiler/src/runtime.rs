// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Symbols and layout facts shared with the runtime support library. The
//! emitted C refers to these by name and never defines them.

/// `void *Tiger_new(void *vtable, int size)`: allocates an object whose first
/// word is the given vtable pointer.
pub const OBJECT_ALLOCATOR: &str = "Tiger_new";

/// `int *Tiger_new_array(int length)`: allocates an integer array including
/// its header.
pub const ARRAY_ALLOCATOR: &str = "Tiger_new_array";

/// `int System_out_println(int value)`.
pub const PRINT: &str = "System_out_println";

/// The name of the emitted entry point.
pub const MAIN: &str = "Tiger_main";

/// Element `0` of an array lives this many words after its base pointer.
///
/// The array allocator lays arrays out this way; changing it here without
/// changing the runtime breaks every array access.
pub const ARRAY_HEADER_WORDS: usize = 3;

/// The header word holding the length of an array.
pub const ARRAY_LENGTH_WORD: usize = 1;
