use super::breakpoint::Breakpoint;

/// Which optional parts of the header are shown for a given environment.
///
/// The logo group and the settings group are always present and have no flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderSections {
    pub links: bool,
    pub search: bool,
    pub account: bool,
    pub logout: bool,
}

impl HeaderSections {
    pub fn resolve(breakpoint: Breakpoint, disable_search: bool, user_present: bool) -> Self {
        let wide = breakpoint.is_above_small();
        Self {
            links: wide,
            search: !disable_search,
            account: wide,
            logout: user_present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BREAKPOINTS: [Breakpoint; 5] = [
        Breakpoint::ExtraSmall,
        Breakpoint::Small,
        Breakpoint::Medium,
        Breakpoint::Large,
        Breakpoint::ExtraLarge,
    ];

    #[test]
    fn test_links_and_account_follow_breakpoint() {
        for breakpoint in ALL_BREAKPOINTS {
            for disable_search in [false, true] {
                for user_present in [false, true] {
                    let sections = HeaderSections::resolve(breakpoint, disable_search, user_present);
                    assert_eq!(sections.links, breakpoint.is_above_small());
                    assert_eq!(sections.account, breakpoint.is_above_small());
                }
            }
        }
    }

    #[test]
    fn test_search_hidden_only_when_disabled() {
        for breakpoint in ALL_BREAKPOINTS {
            assert!(HeaderSections::resolve(breakpoint, false, false).search);
            assert!(!HeaderSections::resolve(breakpoint, true, false).search);
        }
    }

    #[test]
    fn test_logout_requires_user() {
        for breakpoint in ALL_BREAKPOINTS {
            assert!(HeaderSections::resolve(breakpoint, false, true).logout);
            assert!(!HeaderSections::resolve(breakpoint, false, false).logout);
        }
    }

    #[test]
    fn test_compact_layout() {
        let sections = HeaderSections::resolve(Breakpoint::Small, true, false);
        assert_eq!(sections, HeaderSections::default());
    }
}
