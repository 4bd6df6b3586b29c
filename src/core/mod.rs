pub mod clock;
pub mod dispatcher;
pub mod event;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use dispatcher::{InputDispatcher, InputListener, ListenerId, Subscription};
pub use event::{ArrowKey, InputEvent, PointerButton, Propagation};
pub use timer::{FixedHz, FrameStats, StatsSample};
