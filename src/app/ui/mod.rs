mod lightbox;
mod theme_toggle;
