// =============================================================================
// Portfolio Web - Static Contact Content
// =============================================================================
// Table of Contents:
// 1. Icons
// 2. Contact Info
// 3. Social Links
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Icons
// -----------------------------------------------------------------------------

/// Icon shown next to a contact entry or social button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Mail,
    MapPin,
    Clock,
    Github,
    Linkedin,
    Terminal,
    Send,
    Download,
    MessageSquare,
}

impl Icon {
    /// Asset path for the icon.
    pub fn src(&self) -> &'static str {
        match self {
            Icon::Mail => "/assets/icons/mail.svg",
            Icon::MapPin => "/assets/icons/map-pin.svg",
            Icon::Clock => "/assets/icons/clock.svg",
            Icon::Github => "/assets/icons/github.svg",
            Icon::Linkedin => "/assets/icons/linkedin.svg",
            Icon::Terminal => "/assets/icons/terminal.svg",
            Icon::Send => "/assets/icons/send.svg",
            Icon::Download => "/assets/icons/download.svg",
            Icon::MessageSquare => "/assets/icons/message-square.svg",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Info
// -----------------------------------------------------------------------------

/// What clicking a contact entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    /// Open the URL in a new browsing context.
    Open(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfoEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub action: Option<ContactAction>,
    pub description: &'static str,
}

pub const CONTACT_INFO: [ContactInfoEntry; 3] = [
    ContactInfoEntry {
        icon: Icon::Mail,
        label: "Email",
        value: "rawatr0788@gmail.com",
        action: Some(ContactAction::Open("mailto:rawatr0788@gmail.com")),
        description: "Direct communication",
    },
    ContactInfoEntry {
        icon: Icon::MapPin,
        label: "Location",
        value: "Dehradun, India",
        action: None,
        description: "Current base",
    },
    ContactInfoEntry {
        icon: Icon::Clock,
        label: "Response Time",
        value: "< 24 hours",
        action: None,
        description: "Average reply time",
    },
];

// -----------------------------------------------------------------------------
// 3. Social Links
// -----------------------------------------------------------------------------

/// URL used by entries that have no destination yet.
pub const PLACEHOLDER_URL: &str = "#";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLinkEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
    pub hover_class: &'static str,
}

impl SocialLinkEntry {
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_URL
    }
}

pub const SOCIAL_LINKS: [SocialLinkEntry; 3] = [
    SocialLinkEntry {
        icon: Icon::Github,
        label: "GitHub",
        url: "https://github.com/rahul-r8488",
        hover_class: "hover:text-gray-700",
    },
    SocialLinkEntry {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/rahul-singh-rawat-1082b3258/",
        hover_class: "hover:text-gray-700",
    },
    SocialLinkEntry {
        icon: Icon::Terminal,
        label: "Dev.to",
        url: PLACEHOLDER_URL,
        hover_class: "hover:text-gray-700",
    },
];
