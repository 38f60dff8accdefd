//! Scroll-driven animation engine. Nothing in here touches the DOM: the
//! viewport and layout come in through [`state::Viewport`] and
//! [`section::LayoutProbe`], and styles go out as a [`timeline::StyleMap`].

pub mod driver;
pub mod pin;
pub mod resolver;
pub mod reveal;
pub mod section;
pub mod state;
pub mod timeline;
