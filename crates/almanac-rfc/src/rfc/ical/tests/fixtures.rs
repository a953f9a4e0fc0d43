//! iCalendar test documents.
//!
//! Adapted from RFC 5545 Appendix A and §3.6. Every line is already in the
//! form the serializer writes (canonical value text, no folding needed), so
//! parse-then-serialize must reproduce the fixture byte for byte. Fixtures do
//! not end with CRLF for the same reason.

/// §3.6.1 - Event with the two required properties plus a time range.
pub const VEVENT_MINIMAL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970903T163000Z\r\n\
DTEND:19970903T190000Z\r\n\
SUMMARY:Annual Employee Review\r\n\
CLASS:PRIVATE\r\n\
CATEGORIES:BUSINESS,HUMAN RESOURCES\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

/// §3.8.5 - Recurring event with zoned times, exceptions and extra dates.
pub const VEVENT_RECURRING: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123402@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;TZID=America/New_York:19970902T090000\r\n\
DURATION:PT1H\r\n\
RRULE:FREQ=MONTHLY;COUNT=10;BYDAY=1FR\r\n\
EXDATE;TZID=America/New_York:19971003T090000,19971107T090000\r\n\
RDATE;VALUE=DATE:19970101,19970120\r\n\
SUMMARY:Monthly review\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

/// §3.6.2 - To-do with a nested audio alarm.
pub const VTODO_WITH_ALARM: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
BEGIN:VTODO\r\n\
UID:20070313T123432Z-456553@example.com\r\n\
DTSTAMP:20070313T123432Z\r\n\
DUE;VALUE=DATE:20070501\r\n\
SUMMARY:Submit Quebec Income Tax Return for 2006\r\n\
CLASS:CONFIDENTIAL\r\n\
CATEGORIES:FAMILY,FINANCE\r\n\
STATUS:NEEDS-ACTION\r\n\
PRIORITY:1\r\n\
BEGIN:VALARM\r\n\
ACTION:AUDIO\r\n\
TRIGGER;VALUE=DATE-TIME:20070425T120000Z\r\n\
REPEAT:4\r\n\
DURATION:PT15M\r\n\
END:VALARM\r\n\
END:VTODO\r\n\
END:VCALENDAR";

/// §3.6.3 - Journal entry with escaped text.
pub const VJOURNAL_ESCAPED: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
BEGIN:VJOURNAL\r\n\
UID:19970901T130000Z-123405@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;VALUE=DATE:19970317\r\n\
SUMMARY:Staff meeting minutes\r\n\
DESCRIPTION:Participants include Joe\\, Lisa\\, and Bob.\\nNext\\; budget\r\n\
END:VJOURNAL\r\n\
END:VCALENDAR";

/// §3.6.4 - Free/busy reply.
pub const VFREEBUSY_REPLY: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
METHOD:REPLY\r\n\
BEGIN:VFREEBUSY\r\n\
UID:19970901T115957Z-76A912@example.com\r\n\
DTSTAMP:19970901T120000Z\r\n\
ORGANIZER:mailto:jane_doe@example.com\r\n\
DTSTART:19971015T050000Z\r\n\
DTEND:19971016T050000Z\r\n\
FREEBUSY:19971015T050000Z/PT8H30M,19971015T160000Z/PT5H30M\r\n\
FREEBUSY;FBTYPE=BUSY-TENTATIVE:19971015T223000Z/19971016T050000Z\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR";

/// §3.6.5 - Time zone with standard and daylight observances.
pub const VTIMEZONE_NEW_YORK: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
LAST-MODIFIED:20050809T050000Z\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:20070311T020000\r\n\
RRULE:FREQ=YEARLY;BYDAY=2SU;BYMONTH=3\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0400\r\n\
TZNAME:EDT\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
DTSTART:20071104T020000\r\n\
RRULE:FREQ=YEARLY;BYDAY=1SU;BYMONTH=11\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
TZNAME:EST\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR";

/// Scheduling request with attendee parameters, a location and a position.
pub const VEVENT_ATTENDEES: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
METHOD:REQUEST\r\n\
BEGIN:VEVENT\r\n\
UID:meeting-42@example.com\r\n\
DTSTAMP:20260110T090000Z\r\n\
SEQUENCE:2\r\n\
DTSTART:20260115T150000Z\r\n\
DTEND:20260115T160000Z\r\n\
ORGANIZER;CN=John Smith:mailto:jsmith@example.com\r\n\
ATTENDEE;CN=\"Doe, Jane\";RSVP=TRUE:mailto:jane@example.com\r\n\
ATTENDEE;CUTYPE=ROOM:mailto:room-1@example.com\r\n\
LOCATION:Conference Room - F123\\, Bldg. 002\r\n\
GEO:37.386013;-122.082932\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

/// Vendor extensions: X- properties, an unknown component and an IANA
/// property this codec has no type for.
pub const VENDOR_EXTENSIONS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Planner 1.0//EN\r\n\
X-WR-CALNAME:Team calendar\r\n\
BEGIN:X-VENDOR-WIDGET\r\n\
X-WIDGET-ID:42\r\n\
BEGIN:X-NESTED\r\n\
X-LEVEL:2\r\n\
END:X-NESTED\r\n\
END:X-VENDOR-WIDGET\r\n\
BEGIN:VEVENT\r\n\
UID:ext-1@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
X-MICROSOFT-CDO-BUSYSTATUS:BUSY\r\n\
X-CUSTOM;X-PARAM=yes:custom\\, escaped text\r\n\
COLOR:turquoise\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

/// Event whose description the serializer must fold, written with LF line
/// endings and a tab continuation as some producers do.
pub const VEVENT_FOLDED_LF: &str = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
PRODID:-//Example Corp//Planner 1.0//EN\n\
BEGIN:VEVENT\n\
UID:folded-1@example.com\n\
DTSTAMP:20260101T000000Z\n\
DESCRIPTION:This description is long enough that it was folded by the pro\n \
ducer and must be folded again on the way out\\, with the escaped comma\n\t \
intact.\n\
END:VEVENT\n\
END:VCALENDAR\n";

/// Every fixture that must survive parse-then-serialize unchanged.
pub const CANONICAL_FIXTURES: &[&str] = &[
    VEVENT_MINIMAL,
    VEVENT_RECURRING,
    VTODO_WITH_ALARM,
    VJOURNAL_ESCAPED,
    VFREEBUSY_REPLY,
    VTIMEZONE_NEW_YORK,
    VEVENT_ATTENDEES,
    VENDOR_EXTENSIONS,
];
