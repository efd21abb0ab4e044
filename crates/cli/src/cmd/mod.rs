pub mod add;
pub mod category;
pub mod doctor;
pub mod focus;
pub mod remove;
pub mod show;
pub mod suggest;
pub mod tag;
pub mod watch;

pub(crate) mod flows;
