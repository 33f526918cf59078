// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod badge;
pub mod criteria;
pub mod filter;
pub mod refresh;
pub mod views;

pub use badge::*;
pub use criteria::*;
pub use filter::*;
pub use refresh::*;
pub use views::*;
