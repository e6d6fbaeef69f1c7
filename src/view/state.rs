#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewState {
    Displaying,    // Current slide is at rest, autoplay timer running
    Transitioning, // Previous slide is sliding out, current one sliding in
}
