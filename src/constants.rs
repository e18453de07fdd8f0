// DOM hooks the page markup is expected to provide.

// Background canvases, back to front
pub const STARFIELD_CANVAS_ID: &str = "starfield-canvas";
pub const NEBULA_CANVAS_ID: &str = "nebula-canvas";
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Optional JSON override for the particle field
pub const PARTICLES_CONFIG_ID: &str = "particles-config";

pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const PLANETS_CONTAINER_ID: &str = "planets";

// Section content containers, filled at startup
pub const HERO_CONTENT_ID: &str = "home-content";
pub const ABOUT_CONTENT_ID: &str = "about-content";
pub const RESUME_CONTENT_ID: &str = "resume-content";
pub const PROJECTS_CONTENT_ID: &str = "projects-content";
pub const CONTACT_CONTENT_ID: &str = "contact-content";

// Navigation
// Highlighting is scoped to the nav bar; any `[data-section]` element scrolls.
pub const NAV_LINK_SELECTOR: &str = "nav [data-section]";
pub const SCROLL_LINK_SELECTOR: &str = "[data-section]";
pub const CONTACT_FORM_SELECTOR: &str = "form.contact-form";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Body classes
pub const SCROLLING_CLASS: &str = "is-scrolling";
pub const HIDDEN_CLASS: &str = "hidden";

// Cursor follower elements
pub const CURSOR_RING_CLASS: &str = "cursor-ring";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
