//! Public navigation bar: mobile menu state, links and the account button.

use crate::models::AdminUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", path: "/" },
    NavLink { label: "Movies", path: "/movies" },
    NavLink { label: "Theaters", path: "/" },
    NavLink { label: "Releases", path: "/" },
    NavLink { label: "Favorites", path: "/favorite" },
];

pub const MY_BOOKINGS_PATH: &str = "/my-bookings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: &'static str,
    pub scroll_to_top: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAction {
    Login,
    UserMenu {
        name: String,
        items: Vec<NavLink>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Navbar {
    is_open: bool,
    user: Option<AdminUser>,
}

impl Navbar {
    pub fn new(user: Option<AdminUser>) -> Self {
        Self {
            is_open: false,
            user,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    pub fn follow(&mut self, link: &NavLink) -> Navigation {
        self.is_open = false;
        Navigation {
            path: link.path,
            scroll_to_top: true,
        }
    }

    pub fn set_user(&mut self, user: Option<AdminUser>) {
        self.user = user;
    }

    pub fn account_action(&self) -> AccountAction {
        match &self.user {
            None => AccountAction::Login,
            Some(user) => AccountAction::UserMenu {
                name: user.name.clone(),
                items: vec![NavLink {
                    label: "My Bookings",
                    path: MY_BOOKINGS_PATH,
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut nav = Navbar::new(None);
        nav.toggle();
        assert!(nav.is_open());
        let movies = nav.links()[1];
        let to = nav.follow(&movies);
        assert_eq!(to.path, "/movies");
        assert!(to.scroll_to_top);
        assert!(!nav.is_open());
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut nav = Navbar::default();
        nav.toggle();
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn account_action_depends_on_sign_in() {
        let mut nav = Navbar::new(None);
        assert_eq!(nav.account_action(), AccountAction::Login);
        nav.set_user(Some(AdminUser {
            id: "u1".to_string(),
            name: "Grace".to_string(),
            image_url: None,
        }));
        match nav.account_action() {
            AccountAction::UserMenu { name, items } => {
                assert_eq!(name, "Grace");
                assert_eq!(items[0].path, MY_BOOKINGS_PATH);
            }
            other => panic!("expected user menu, got {:?}", other),
        }
    }
}
