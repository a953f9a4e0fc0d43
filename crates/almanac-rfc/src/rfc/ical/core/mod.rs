//! iCalendar core models (RFC 5545).
//!
//! The component tree, properties, parameters and the typed values they
//! carry. Unknown properties, parameters and components are kept so that
//! nothing a producer wrote is lost on re-serialization.

mod component;
mod datetime;
mod duration;
mod parameter;
mod property;
pub mod registry;
mod rrule;
mod value;

pub use component::{Component, ComponentKind};
pub use datetime::{DateTime, Time, UtcOffset};
pub use duration::Duration;
pub use parameter::{ParamValue, Parameter, TriggerRelated, names as param_names};
pub use property::{ContentLine, Property, PropertyValue, names};
pub use registry::{PropertySpec, ValueType};
pub use rrule::{Frequency, RRule, Weekday, WeekdayNum};
pub use value::{Date, DateOrDateTime, Geo, Period, Value, format_float};
