use serde::Serialize;

/// Relative position of an event with respect to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Past,     // offset < 0
    Today,    // offset == 0
    Tomorrow, // offset == 1
    Soon,     // 2..=3
    Later,    // > 3
}

impl Tone {
    pub fn from_offset(offset: i64) -> Self {
        match offset {
            i64::MIN..=-1 => Tone::Past,
            0 => Tone::Today,
            1 => Tone::Tomorrow,
            2..=3 => Tone::Soon,
            _ => Tone::Later,
        }
    }

    /// Colour class used by the web agenda for the badge.
    pub fn color_class(&self) -> &'static str {
        match self {
            Tone::Past => "bg-gray-100 text-gray-600",
            Tone::Today => "bg-red-100 text-red-700",
            Tone::Tomorrow => "bg-orange-100 text-orange-700",
            Tone::Soon => "bg-yellow-100 text-yellow-700",
            Tone::Later => "bg-blue-100 text-blue-700",
        }
    }
}

/// Badge text and colour for an event, derived at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeDayLabel {
    pub text: String,
    pub color_class: &'static str,
    pub tone: Tone,
}
