// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod emitter;
mod validate;

pub use self::emitter::{emit_c, CEmitter};
