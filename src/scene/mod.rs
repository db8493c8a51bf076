//! Scene coordination: registry, introduction sequencing, the per-frame
//! updater, and the loop driver, plus the external collaborator seams
//! (assets, camera).

pub mod assets;
pub mod camera;
pub mod descriptor;
pub mod driver;
pub mod registry;
pub mod sequencer;
pub mod updater;

pub use assets::{AssetProvider, MeshLibrary};
pub use camera::{PerspectiveCamera, Projector};
pub use descriptor::PendingDescriptor;
pub use driver::{FrameLoop, FrameReport, SimulationClock};
pub use registry::{SceneRegistry, SimObject, HUB_NAME};
pub use sequencer::{Introduction, IntroductionSequencer};
pub use updater::FrameUpdater;
