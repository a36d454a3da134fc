mod boot;
mod dom_surface;
mod image_gate;
mod page_config;
mod resize;
mod slideshow;

fn main() {
    console_error_panic_hook::set_once();
    boot::run();
}
