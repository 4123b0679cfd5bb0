mod artifact;
mod loader;
mod sidebar;
