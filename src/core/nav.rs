/// Top-level views of the site; exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Contact,
    About,
    Works,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Contact, View::About, View::Works];

    /// Name used in `data-nav` / `data-view` attributes.
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Contact => "contact",
            View::About => "about",
            View::Works => "works",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => Some(View::Home),
            "contact" => Some(View::Contact),
            "about" => Some(View::About),
            "works" => Some(View::Works),
            _ => None,
        }
    }

    /// The 3D hero and the video section live on the home view.
    pub fn shows_hero(self) -> bool {
        self == View::Home
    }

    pub fn hosts_booking_embed(self) -> bool {
        self == View::Contact
    }
}

/// One boolean per view, in `View::ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewFlags {
    pub home: bool,
    pub contact: bool,
    pub about: bool,
    pub works: bool,
}

impl ViewFlags {
    pub fn for_view(view: View) -> Self {
        Self {
            home: view == View::Home,
            contact: view == View::Contact,
            about: view == View::About,
            works: view == View::Works,
        }
    }

    pub fn as_array(&self) -> [bool; 4] {
        [self.home, self.contact, self.about, self.works]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewChange {
    pub from: View,
    pub to: View,
}

#[derive(Clone, Debug, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn flags(&self) -> ViewFlags {
        ViewFlags::for_view(self.current)
    }

    /// Switch to `to`. Returns the change (and the caller resets scroll) only
    /// when the view actually differs.
    pub fn navigate(&mut self, to: View) -> Option<ViewChange> {
        if to == self.current {
            return None;
        }
        let change = ViewChange {
            from: self.current,
            to,
        };
        self.current = to;
        Some(change)
    }
}
