pub mod background;
pub mod magnetic;
pub mod section;
pub mod tilt;

use portfolio_site::motion::Rect;

fn rect_of(r: &web_sys::DomRect) -> Rect {
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}
