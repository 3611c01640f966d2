pub const SITE_NAME: &str = "Speedweb";

/// Cal.com link opened by every "book a call" button.
pub const BOOKING_LINK: &str = "speedweb/30min";

#[cfg(debug_assertions)]
pub fn get_base_url() -> &'static str {
    "http://localhost:8080"  // Trunk dev server
}

#[cfg(not(debug_assertions))]
pub fn get_base_url() -> &'static str {
    "https://withspeedweb.com"
}

/// Media conditions shared by the sections.
pub mod breakpoints {
    pub const MOBILE: &str = "(max-width: 640px)";
    pub const SMALL_DEVICE: &str = "(max-width: 429px)";
    pub const DESKTOP: &str = "(min-width: 769px)";
    /// iPhone XR / 11 portrait.
    pub const IPHONE_XR: &str = "(width: 414px) and (height: 896px)";

    pub const ALL: [&str; 4] = [MOBILE, SMALL_DEVICE, DESKTOP, IPHONE_XR];
}

#[cfg(test)]
mod tests {
    use super::breakpoints::*;
    use crate::media::{Condition, Viewport};

    #[test]
    fn test_breakpoints_parse() {
        for condition in ALL {
            assert!(Condition::parse(condition).is_ok(), "{condition}");
        }
    }

    #[test]
    fn test_desktop_and_mobile_do_not_overlap() {
        let mobile = Condition::parse(MOBILE).unwrap();
        let desktop = Condition::parse(DESKTOP).unwrap();
        for width in [320.0, 429.0, 640.0, 768.0, 769.0, 1440.0] {
            let viewport = Viewport::new(width, 900.0);
            assert!(!(mobile.matches(&viewport) && desktop.matches(&viewport)));
        }
    }

    #[test]
    fn test_device_fingerprint_is_also_mobile() {
        let viewport = Viewport::new(414.0, 896.0);
        assert!(Condition::parse(IPHONE_XR).unwrap().matches(&viewport));
        assert!(Condition::parse(MOBILE).unwrap().matches(&viewport));
    }
}
