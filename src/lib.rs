#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! Handle availability check for YouTube

pub use crate::checked::{Availability, Checked};
pub use crate::handle::Handle;
pub use crate::journal::Journal;
pub use crate::notify::{send_notification, NotificationError};
pub use crate::prober::{Prober, CONNECTION_FAILED, DEFAULT_PLATFORM};

mod checked;
mod handle;
mod journal;
mod notify;
mod prober;
