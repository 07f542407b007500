use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBuilding, LdCalendar, LdDollarSign, LdFileText, LdFuel, LdLayoutDashboard,
    LdMapPin, LdPackage, LdReceipt, LdSettings, LdTrendingUp, LdTruck, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Glyph;

/// Lucide icon for a menu or card glyph.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = 18)] size: u32) -> Element {
    match glyph {
        Glyph::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        Glyph::Truck => rsx! { Icon::<LdTruck> { icon: LdTruck, width: size, height: size } },
        Glyph::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: size, height: size } },
        Glyph::DriverBadge => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size } },
        Glyph::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: size, height: size } },
        Glyph::Money => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: size, height: size } },
        Glyph::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        Glyph::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        Glyph::MapPin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: size, height: size } },
        Glyph::Trend => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: size, height: size } },
        Glyph::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        Glyph::Fuel => rsx! { Icon::<LdFuel> { icon: LdFuel, width: size, height: size } },
        Glyph::Document => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        Glyph::Receipt => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: size, height: size } },
        Glyph::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
    }
}
