//! Scene orchestration.
//!
//! Event handlers only write router state and apply the router's effects.
//! `frame` then runs the per-frame pipeline in a fixed order: resolve targets
//! from the focus state as it stands, step the driver, and derive
//! connectivity from the freshly stepped positions.

use crate::camera::{pick_item, plane_size, Camera};
use crate::connectivity::{derive_links, link_segments, Link, Segment};
use crate::constants::{LINK_DISTANCE_THRESHOLD, REFERENCE_FRAME_SEC};
use crate::events::{EventSource, InputEvent, SceneObserver, Subscription};
use crate::flash::FlashTimer;
use crate::layout::{generate_layout, LayoutSeed};
use crate::motion::{FrameInput, LiveTransform, MotionDriver};
use crate::parallax::ParallaxInput;
use crate::registry::{MediaItem, MediaRegistry};
use crate::resolver::{resolve_targets, Resolution, ResolveInput};
use crate::reveal::TextReveal;
use crate::router::{FocusPolicy, InteractionRouter, Modal, RouterEffect};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub policy: FocusPolicy,
    pub link_threshold: f32,
    /// Seeds phases, rearrange steps and peer jitter.
    pub rng_seed: u64,
    pub initial_seed: LayoutSeed,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            policy: FocusPolicy::Reassign,
            link_threshold: LINK_DISTANCE_THRESHOLD,
            rng_seed: 42,
            initial_seed: LayoutSeed::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ItemFrame<'a> {
    pub index: usize,
    pub item: &'a MediaItem,
    pub transform: LiveTransform,
    /// Unscaled plane size; the model matrix applies the live scale.
    pub size: Vec2,
    pub model: Mat4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Caption<'a> {
    pub index: usize,
    pub text: &'a str,
    pub opacity: f32,
}

/// Everything the render step needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput<'a> {
    pub items: Vec<ItemFrame<'a>>,
    pub links: Vec<Link>,
    pub segments: Vec<Segment>,
    pub caption: Option<Caption<'a>>,
    pub scene_focused: bool,
    pub flash: bool,
    pub blurred: bool,
    pub view_proj: Mat4,
}

pub struct Scene {
    registry: MediaRegistry,
    sizes: Vec<Vec2>,
    viewport: Viewport,
    camera: Camera,
    seed: LayoutSeed,
    layout: Vec<Vec3>,
    router: InteractionRouter,
    resolution: Resolution,
    targets_dirty: bool,
    driver: MotionDriver,
    flash: FlashTimer,
    reveal: TextReveal,
    rng: StdRng,
    link_threshold: f32,
    clock_sec: f64,
    observers: Vec<Box<dyn SceneObserver>>,
}

impl Scene {
    pub fn new(registry: MediaRegistry, viewport: Viewport, config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let sizes = registry
            .items()
            .iter()
            .map(|item| plane_size(item.known_aspect()))
            .collect();
        let layout = generate_layout(
            config.initial_seed,
            registry.len(),
            viewport.profile().scatter_radius,
        );
        let router = InteractionRouter::new(registry.len(), config.policy);
        let camera = Camera {
            aspect: viewport.aspect,
            fovy_radians: viewport.fovy_radians,
            ..Camera::default()
        };
        let resolution = resolve_targets(
            &ResolveInput {
                focused: None,
                layout: &layout,
                viewport,
                focused_aspect: None,
                camera_eye: camera.eye,
            },
            &mut rng,
        );
        let driver = MotionDriver::new(&resolution, &mut rng);
        log::info!(
            "[scene] {} items, {:?} viewport",
            registry.len(),
            viewport.class
        );
        Self {
            registry,
            sizes,
            viewport,
            camera,
            seed: config.initial_seed,
            layout,
            router,
            resolution,
            targets_dirty: false,
            driver,
            flash: FlashTimer::default(),
            reveal: TextReveal::default(),
            rng,
            link_threshold: config.link_threshold,
            clock_sec: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn SceneObserver>) {
        self.observers.push(observer);
    }

    /// Route every event from `source` into `scene` until the returned
    /// subscription is dropped.
    pub fn attach(scene: &Rc<RefCell<Scene>>, source: &mut dyn EventSource) -> Subscription {
        let scene = Rc::clone(scene);
        source.subscribe(Box::new(move |ev: &InputEvent| {
            scene.borrow_mut().handle(ev)
        }))
    }

    pub fn registry(&self) -> &MediaRegistry {
        &self.registry
    }

    pub fn focused(&self) -> Option<usize> {
        self.router.focused()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.router.modal()
    }

    pub fn seed(&self) -> LayoutSeed {
        self.seed
    }

    pub fn layout(&self) -> &[Vec3] {
        &self.layout
    }

    pub fn parallax(&self) -> &ParallaxInput {
        self.router.parallax()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn transforms(&self) -> &[LiveTransform] {
        self.driver.transforms()
    }

    /// Targets the driver is currently chasing.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let class_changed = viewport.class != self.viewport.class;
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect;
        self.camera.fovy_radians = viewport.fovy_radians;
        if class_changed {
            log::debug!("[scene] viewport class -> {:?}", viewport.class);
            self.regenerate_layout();
        }
        self.targets_dirty = true;
    }

    pub fn handle(&mut self, event: &InputEvent) {
        let effects = match *event {
            InputEvent::PointerMove { ndc } => {
                self.router.pointer_move(ndc);
                return;
            }
            InputEvent::Wheel { delta_x, delta_y } => {
                self.router.wheel(delta_x, delta_y);
                return;
            }
            InputEvent::Click { ndc } => match self.pick(ndc) {
                Some(index) => self.router.item_click(index),
                None => self.router.background_click(),
            },
            InputEvent::ItemClick(index) => self.router.item_click(index),
            InputEvent::BackgroundClick => self.router.background_click(),
            InputEvent::OpenModal(modal) => self.router.open_modal(modal),
            InputEvent::CloseModals => self.router.close_modals(),
        };
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Item under a click in normalized device coordinates.
    pub fn pick(&self, ndc: Vec2) -> Option<usize> {
        let (origin, dir) = self.camera.ray_from_ndc(ndc);
        pick_item(origin, dir, self.driver.transforms(), &self.sizes)
    }

    pub fn frame(&mut self, dt_sec: f32) -> FrameOutput<'_> {
        let dt_sec = dt_sec.max(0.0);
        self.clock_sec += dt_sec as f64;

        if self.targets_dirty {
            self.resolve();
        }
        self.router
            .parallax_mut()
            .decay(dt_sec / REFERENCE_FRAME_SEC);
        self.driver.step(&FrameInput {
            resolution: &self.resolution,
            parallax: *self.router.parallax(),
            camera_eye: self.camera.eye,
            time_sec: self.clock_sec as f32,
            dt_sec,
        });
        self.reveal.advance(dt_sec);
        let flash = self.flash.tick(self.clock_sec);

        let positions = self.driver.positions();
        let links = derive_links(&positions, self.link_threshold);
        let segments = link_segments(&positions, &links);

        let items = self
            .registry
            .items()
            .iter()
            .zip(self.driver.transforms())
            .zip(&self.sizes)
            .enumerate()
            .map(|(index, ((item, transform), size))| ItemFrame {
                index,
                item,
                transform: *transform,
                size: *size,
                model: transform.model_matrix(),
            })
            .collect();

        let caption = self.router.focused().and_then(|index| {
            let live = self.driver.get(index)?;
            Some(Caption {
                index,
                text: self.reveal.visible(),
                opacity: live.caption_opacity,
            })
        });

        FrameOutput {
            items,
            links,
            segments,
            caption,
            scene_focused: self.resolution.scene_focused,
            flash,
            blurred: self.router.modal().is_some(),
            view_proj: self.camera.view_proj(),
        }
    }

    fn apply(&mut self, effect: RouterEffect) {
        match effect {
            RouterEffect::FocusChanged(focused) => {
                self.targets_dirty = true;
                match self.router.focused().and_then(|i| self.registry.get(i)) {
                    Some(item) => self.reveal.start(item.caption()),
                    None => self.reveal.clear(),
                }
                for o in &mut self.observers {
                    o.focus_changed(focused);
                }
            }
            RouterEffect::Rearrange => {
                self.seed.bump(&mut self.rng);
                self.regenerate_layout();
                self.targets_dirty = true;
                for o in &mut self.observers {
                    o.rearrange_requested();
                }
            }
            RouterEffect::Flash => {
                self.flash.trigger(self.clock_sec);
                for o in &mut self.observers {
                    o.interaction();
                }
            }
            RouterEffect::BlurChanged(blurred) => {
                for o in &mut self.observers {
                    o.blur_changed(blurred);
                }
            }
        }
    }

    fn regenerate_layout(&mut self) {
        self.layout = generate_layout(
            self.seed,
            self.registry.len(),
            self.viewport.profile().scatter_radius,
        );
        log::debug!("[scene] layout seed {:.3}", self.seed.value());
    }

    fn resolve(&mut self) {
        let focused = self.router.focused();
        let focused_aspect = focused
            .and_then(|i| self.registry.get(i))
            .and_then(MediaItem::known_aspect);
        self.resolution = resolve_targets(
            &ResolveInput {
                focused,
                layout: &self.layout,
                viewport: self.viewport,
                focused_aspect,
                camera_eye: self.camera.eye,
            },
            &mut self.rng,
        );
        self.targets_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;

    #[test]
    fn targets_are_not_rejittered_every_frame() {
        let mut scene = Scene::new(default_registry(), Viewport::default(), SceneConfig::default());
        scene.handle(&InputEvent::ItemClick(0));
        scene.frame(REFERENCE_FRAME_SEC);
        let first = scene.resolution().clone();
        scene.frame(REFERENCE_FRAME_SEC);
        assert_eq!(&first, scene.resolution());
    }

    #[test]
    fn caption_follows_focus() {
        let mut scene = Scene::new(default_registry(), Viewport::default(), SceneConfig::default());
        assert!(scene.frame(REFERENCE_FRAME_SEC).caption.is_none());
        scene.handle(&InputEvent::ItemClick(2));
        for _ in 0..200 {
            scene.frame(REFERENCE_FRAME_SEC);
        }
        let out = scene.frame(REFERENCE_FRAME_SEC);
        let caption = out.caption.expect("focused item has a caption");
        assert_eq!(caption.index, 2);
        assert!(caption.text.starts_with("Forum\n"));
        assert!(caption.opacity > 0.99);
    }
}
