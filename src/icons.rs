#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Brain,
    BarChart,
    LineChart,
    TrendChart,
    Database,
    Layers,
    Globe,
    GraduationCap,
    Mail,
    Phone,
    Rocket,
    Users,
    Building,
    Calendar,
    Send,
    Sun,
    Moon,
}

impl Icon {
    /// Stable identifier, also used as the `icon-*` CSS class.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::BarChart => "bar-chart",
            Icon::LineChart => "line-chart",
            Icon::TrendChart => "trend-chart",
            Icon::Database => "database",
            Icon::Layers => "layers",
            Icon::Globe => "globe",
            Icon::GraduationCap => "graduation-cap",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::Rocket => "rocket",
            Icon::Users => "users",
            Icon::Building => "building",
            Icon::Calendar => "calendar",
            Icon::Send => "send",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::BarChart => "📊",
            Icon::LineChart => "📈",
            Icon::TrendChart => "💹",
            Icon::Database => "🗄️",
            Icon::Layers => "🧱",
            Icon::Globe => "🌐",
            Icon::GraduationCap => "🎓",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::Rocket => "🚀",
            Icon::Users => "👥",
            Icon::Building => "🏢",
            Icon::Calendar => "📅",
            Icon::Send => "📨",
            Icon::Sun => "☀️",
            Icon::Moon => "🌙",
        }
    }

    pub fn css_class(self) -> String {
        format!("icon-{}", self.name())
    }
}
