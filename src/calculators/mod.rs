//! The calculator suite
//!
//! Each submodule is one independent calculator: an inputs record, a
//! zero-constructible result record, and a total `compute` function. There
//! is no shared state and no ordering between them; each runs to completion
//! within a single call.

pub mod emi;
pub mod fd;
pub mod gratuity;
pub mod lumpsum;
pub mod mutual_fund;
pub mod ppf;
pub mod retirement;
pub mod sip;
pub mod swp;
