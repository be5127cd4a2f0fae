mod anchor;
mod bday;
mod cbmonth;
mod ops;

pub use crate::scheduling::offsets::{
    anchor::{month_offset, MonthAnchor},
    bday::CustomBusinessDay,
    cbmonth::CustomBusinessMonth,
};
