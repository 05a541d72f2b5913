//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::NavIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBell as Bell, LuBriefcase as Briefcase, LuCalendar as Calendar, LuCircleUser as User,
        LuFactory as Factory, LuGlobe as Globe, LuHouse as Home, LuLayers as Layers,
        LuLayoutDashboard as Dashboard, LuMenu as Menu, LuMessageSquare as Message,
        LuMic as Mic, LuSearch as Search, LuStar as Star, LuVideo as Video, LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBell as Bell, BsBoxes as Factory, BsBriefcase as Briefcase, BsCalendar as Calendar,
        BsCameraVideo as Video, BsChatSquare as Message, BsGlobe as Globe,
        BsGrid1x2 as Dashboard, BsHouse as Home, BsLayers as Layers, BsLightningFill as Zap,
        BsList as Menu, BsMic as Mic, BsPersonCircle as User, BsSearch as Search,
        BsStar as Star,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(STAR, Star);
themed_icon!(VIDEO, Video);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(HOME, Home);
themed_icon!(GLOBE, Globe);
themed_icon!(CALENDAR, Calendar);
themed_icon!(LAYERS, Layers);
themed_icon!(FACTORY, Factory);
themed_icon!(MESSAGE, Message);
themed_icon!(MIC, Mic);
themed_icon!(USER, User);
themed_icon!(ZAP, Zap);
themed_icon!(MENU, Menu);
themed_icon!(BELL, Bell);
themed_icon!(SEARCH, Search);

/// Concrete icon for a navigation glyph.
pub fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Dashboard => DASHBOARD,
        NavIcon::Star => STAR,
        NavIcon::Video => VIDEO,
        NavIcon::Briefcase => BRIEFCASE,
        NavIcon::Home => HOME,
        NavIcon::Globe => GLOBE,
        NavIcon::Calendar => CALENDAR,
        NavIcon::Layers => LAYERS,
        NavIcon::Factory => FACTORY,
        NavIcon::Message => MESSAGE,
        NavIcon::Mic => MIC,
        NavIcon::User => USER,
    }
}
