use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;

use crate::error::SceneError;
use crate::scene::DecorativeModel;

/// One external model to fetch and place once its scene is ready.
#[derive(Clone, Debug)]
pub struct ModelRequest {
    /// glTF file holding the model.
    pub path: &'static str,
    /// World position of the attached model.
    pub translation: Vec3,
    /// Uniform scale of the attached model.
    pub scale: f32,
}

impl ModelRequest {
    /// Placement of the attached model.
    fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_scale(Vec3::splat(self.scale))
    }
}

/// Farm buildings decorating the back of the garden.
const MODEL_REQUESTS: [ModelRequest; 2] = [
    ModelRequest {
        path: "models/farm1.glb",
        translation: Vec3::new(10.0, 0.0, -18.0),
        scale: 0.01,
    },
    ModelRequest {
        path: "models/farm2.glb",
        translation: Vec3::new(-10.0, 0.0, -15.0),
        scale: 0.0006,
    },
];

/// Loaded scene of one model, with every mesh and material group it declares.
pub struct LoadedModel {
    scene: Handle<Scene>,
}

/// Where a model slot stands in its load-and-attach lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachStatus {
    /// Assets still loading.
    Pending,
    /// Model entity spawned; further completions are ignored.
    Attached(Entity),
    /// Load failed; the scene goes on without this model.
    Abandoned,
}

/// Load task and attach state for one requested model.
pub struct ModelSlot {
    request: ModelRequest,
    task: Option<Task<Result<LoadedModel, SceneError>>>,
    status: AttachStatus,
}

impl ModelSlot {
    /// Build a pending slot with no task yet.
    fn new(request: ModelRequest) -> Self {
        Self {
            request,
            task: None,
            status: AttachStatus::Pending,
        }
    }

    /// Start loading the model's default scene and spawn an IO task that waits for it.
    fn start(request: ModelRequest, asset_server: &AssetServer, task_pool: &IoTaskPool) -> Self {
        let server = asset_server.clone();
        let scene: Handle<Scene> =
            server.load(bevy::gltf::GltfAssetLabel::Scene(0).from_asset(request.path));
        let path = request.path;
        let task = task_pool.spawn(async move {
            server
                .wait_for_asset(&scene)
                .await
                .map_err(|err| SceneError::asset_load(path, err))?;
            Ok(LoadedModel { scene })
        });
        let mut slot = Self::new(request);
        slot.task = Some(task);
        slot
    }

    /// Poll the load task once; yields its outcome the frame it finishes.
    fn poll(&mut self) -> Option<Result<LoadedModel, SceneError>> {
        let task = self.task.as_mut()?;
        let outcome = future::block_on(future::poll_once(task))?;
        self.task = None;
        Some(outcome)
    }

    /// Apply a load outcome. Only the first outcome of a pending slot has an effect.
    ///
    /// The model entity is spawned with all of its components in one bundle.
    fn resolve(&mut self, commands: &mut Commands, outcome: Result<LoadedModel, SceneError>) {
        if self.status != AttachStatus::Pending {
            debug!(
                "ignoring repeated completion for {} ({:?})",
                self.request.path, self.status
            );
            return;
        }
        match outcome {
            Ok(model) => {
                let entity = commands
                    .spawn((
                        DecorativeModel,
                        SceneRoot(model.scene),
                        self.request.transform(),
                    ))
                    .id();
                info!("attached model {}", self.request.path);
                self.status = AttachStatus::Attached(entity);
            }
            Err(err) => {
                warn!("{err}; continuing without this decoration");
                self.status = AttachStatus::Abandoned;
            }
        }
    }
}

#[derive(Resource, Default)]
/// All requested models and their attach state.
pub struct ModelAttachments {
    slots: Vec<ModelSlot>,
}

/// Request every decorative model and track the load tasks.
pub fn request_models(mut commands: Commands, asset_server: Res<AssetServer>) {
    let task_pool = IoTaskPool::get();
    let slots = MODEL_REQUESTS
        .iter()
        .cloned()
        .map(|request| ModelSlot::start(request, &asset_server, task_pool))
        .collect();
    commands.insert_resource(ModelAttachments { slots });
}

/// Attach models whose load tasks finished this frame.
pub fn attach_loaded_models_system(mut commands: Commands, mut models: ResMut<ModelAttachments>) {
    for slot in &mut models.slots {
        if let Some(outcome) = slot.poll() {
            slot.resolve(&mut commands, outcome);
        }
    }
}
