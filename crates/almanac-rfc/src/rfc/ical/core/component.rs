//! iCalendar component types (RFC 5545 §3.4-3.6).

use std::collections::HashMap;

use super::property::names;
use super::{DateOrDateTime, DateTime, Duration, Geo, Property, PropertyValue, RRule, UtcOffset, Value};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// Any other component name; the original name is kept on the component.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Unknown,
        }
    }

    /// Returns whether this is a schedulable component (VEVENT, VTODO, VJOURNAL).
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::Event | Self::Todo | Self::Journal)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component.
///
/// Holds an ordered property list with a by-name index, and nested
/// sub-components. A VCALENDAR contains VEVENTs, which may contain VALARMs.
///
/// Property names are matched case-insensitively. Stored properties are
/// only reachable through shared references; use [`Component::set_property`]
/// and friends to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    name: String,
    properties: Vec<Property>,
    index: HashMap<String, Vec<usize>>,
    children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self::with_name(kind, kind.as_str().to_string())
    }

    /// Creates a component from its name; unknown names become
    /// [`ComponentKind::Unknown`] and keep the name as given.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_name(ComponentKind::parse(&name), name)
    }

    fn with_name(kind: ComponentKind, name: String) -> Self {
        Self {
            kind,
            name,
            properties: Vec::new(),
            index: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Nameless container used as the bottom of the assembly stack.
    pub(crate) fn synthetic_root() -> Self {
        Self::with_name(ComponentKind::Unknown, String::new())
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTODO component.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates a VJOURNAL component.
    #[must_use]
    pub fn journal() -> Self {
        Self::new(ComponentKind::Journal)
    }

    /// Creates a VFREEBUSY component.
    #[must_use]
    pub fn freebusy() -> Self {
        Self::new(ComponentKind::FreeBusy)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Component name as written (e.g., `VEVENT`, `X-VENDOR-THING`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Nested sub-components in order.
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Mutable access to the sub-components.
    pub fn children_mut(&mut self) -> &mut [Component] {
        &mut self.children
    }

    /// Adds a sub-component at the end.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Removes and returns every sub-component of `kind`.
    pub fn remove_children_of_kind(&mut self, kind: ComponentKind) -> Vec<Component> {
        let (removed, kept) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|child| child.kind == kind);
        self.children = kept;
        removed
    }

    /// Splits the component into its properties and children.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Property>, Vec<Component>) {
        (self.properties, self.children)
    }

    /// Appends a property. Existing properties of the same name are kept.
    ///
    /// The name is stored uppercased so the index and the property agree
    /// even when `prop` was built by hand.
    pub fn add_property(&mut self, mut prop: Property) {
        prop.name.make_ascii_uppercase();
        self.index
            .entry(prop.name.clone())
            .or_default()
            .push(self.properties.len());
        self.properties.push(prop);
    }

    /// Appends a new occurrence of `name` with `value`.
    pub fn append_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.add_property(Property::new(name, value));
    }

    /// Replaces every occurrence of `prop.name` with `prop`.
    ///
    /// If exactly one occurrence existed the replacement takes its position;
    /// otherwise it is appended.
    pub fn set_property(&mut self, mut prop: Property) {
        prop.name.make_ascii_uppercase();
        match self.positions(&prop.name) {
            [position] => {
                let position = *position;
                if let Some(slot) = self.properties.get_mut(position) {
                    *slot = prop;
                }
            }
            [] => self.add_property(prop),
            _ => {
                self.remove_property(&prop.name);
                self.add_property(prop);
            }
        }
    }

    /// Sets `name` to `value`, or removes it when `value` is `None` or an
    /// empty list.
    pub fn set_value(&mut self, name: &str, value: Option<impl Into<PropertyValue>>) {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => self.set_property(Property::new(name, value)),
            _ => {
                self.remove_property(name);
            }
        }
    }

    /// Removes and returns every occurrence of `name`.
    pub fn remove_property(&mut self, name: &str) -> Vec<Property> {
        if self.positions(name).is_empty() {
            return Vec::new();
        }
        let upper = name.to_ascii_uppercase();
        let (removed, kept) = std::mem::take(&mut self.properties)
            .into_iter()
            .partition(|prop| prop.name == upper);
        self.properties = kept;
        self.rebuild_index();
        removed
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, prop) in self.properties.iter().enumerate() {
            self.index
                .entry(prop.name.clone())
                .or_default()
                .push(position);
        }
    }

    fn positions(&self, name: &str) -> &[usize] {
        self.index
            .get(&name.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns true if at least one `name` property is present.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        !self.positions(name).is_empty()
    }

    /// Gets the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.positions(name)
            .first()
            .and_then(|&position| self.properties.get(position))
    }

    /// Gets all properties with the given name, in insertion order.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.positions(name)
            .iter()
            .filter_map(|&position| self.properties.get(position))
            .collect()
    }

    /// First value of the first `name` property.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.get_property(name).and_then(Property::first_value)
    }

    /// Every value of every `name` property, flattened in order.
    #[must_use]
    pub fn get_values(&self, name: &str) -> Vec<&Value> {
        self.get_properties(name)
            .into_iter()
            .flat_map(Property::values)
            .collect()
    }

    /// Text of the first `name` property, if it is TEXT.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get_value(name).and_then(Value::as_text)
    }

    /// Every TEXT value of every `name` property (e.g., all `CATEGORIES`).
    #[must_use]
    pub fn get_texts(&self, name: &str) -> Vec<&str> {
        self.get_values(name)
            .into_iter()
            .filter_map(Value::as_text)
            .collect()
    }

    /// URI or CAL-ADDRESS of the first `name` property.
    #[must_use]
    pub fn get_uri(&self, name: &str) -> Option<&str> {
        self.get_value(name).and_then(Value::as_uri)
    }

    /// Integer of the first `name` property.
    #[must_use]
    pub fn get_integer(&self, name: &str) -> Option<i32> {
        self.get_value(name).and_then(Value::as_integer)
    }

    /// Date-time of the first `name` property.
    #[must_use]
    pub fn get_datetime(&self, name: &str) -> Option<&DateTime> {
        self.get_value(name).and_then(Value::as_datetime)
    }

    /// Date or date-time of the first `name` property.
    #[must_use]
    pub fn get_date_or_datetime(&self, name: &str) -> Option<DateOrDateTime> {
        self.get_value(name).and_then(Value::as_date_or_datetime)
    }

    /// Duration of the first `name` property.
    #[must_use]
    pub fn get_duration(&self, name: &str) -> Option<&Duration> {
        self.get_value(name).and_then(Value::as_duration)
    }

    /// Recurrence rule of the first `name` property.
    #[must_use]
    pub fn get_recur(&self, name: &str) -> Option<&RRule> {
        self.get_value(name).and_then(Value::as_recur)
    }

    /// UTC offset of the first `name` property.
    #[must_use]
    pub fn get_utc_offset(&self, name: &str) -> Option<UtcOffset> {
        self.get_value(name).and_then(Value::as_utc_offset)
    }

    /// Position of the first `name` property.
    #[must_use]
    pub fn get_geo(&self, name: &str) -> Option<Geo> {
        self.get_value(name).and_then(Value::as_geo)
    }

    /// Gets the UID property value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_text(names::UID)
    }

    /// Gets the SUMMARY property value.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_text(names::SUMMARY)
    }

    /// Gets the DESCRIPTION property value.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_text(names::DESCRIPTION)
    }

    /// Returns child components of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Event)
    }

    /// Returns all VTODO children.
    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Todo)
    }

    /// Returns all VJOURNAL children.
    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Journal)
    }

    /// Returns all VFREEBUSY children.
    #[must_use]
    pub fn freebusy_components(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::FreeBusy)
    }

    /// Returns all VTIMEZONE children.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Timezone)
    }

    /// Returns all VALARM children.
    #[must_use]
    pub fn alarms(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Alarm)
    }
}
