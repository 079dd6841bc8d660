use folio_core::constants::{REFERENCE_FRAME_SEC, SCROLL_CLAMP};
use folio_core::{
    default_registry, EventHandler, EventSource, FocusPolicy, InputEvent, MediaItem,
    MediaRegistry, Modal, Scene, SceneConfig, SceneObserver, Subscription, Viewport,
    ViewportClass,
};
use glam::{Vec2, Vec4Swizzles};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
struct Counts {
    focus: Vec<bool>,
    rearranges: usize,
    flashes: usize,
    blur: Vec<bool>,
}

struct Recorder(Rc<RefCell<Counts>>);

impl SceneObserver for Recorder {
    fn focus_changed(&mut self, focused: bool) {
        self.0.borrow_mut().focus.push(focused);
    }
    fn rearrange_requested(&mut self) {
        self.0.borrow_mut().rearranges += 1;
    }
    fn interaction(&mut self) {
        self.0.borrow_mut().flashes += 1;
    }
    fn blur_changed(&mut self, blurred: bool) {
        self.0.borrow_mut().blur.push(blurred);
    }
}

fn scene_with_recorder(config: SceneConfig) -> (Scene, Rc<RefCell<Counts>>) {
    let counts = Rc::new(RefCell::new(Counts::default()));
    let mut scene = Scene::new(default_registry(), Viewport::default(), config);
    scene.add_observer(Box::new(Recorder(counts.clone())));
    (scene, counts)
}

/// Event source that forwards whatever the test pushes.
#[derive(Default, Clone)]
struct ManualSource {
    handlers: Rc<RefCell<Vec<Option<EventHandler>>>>,
}

impl ManualSource {
    fn emit(&self, event: InputEvent) {
        for handler in self.handlers.borrow_mut().iter_mut().flatten() {
            handler(&event);
        }
    }

    fn live_handlers(&self) -> usize {
        self.handlers.borrow().iter().flatten().count()
    }
}

impl EventSource for ManualSource {
    fn subscribe(&mut self, handler: EventHandler) -> Subscription {
        let slot = {
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(handler));
            handlers.len() - 1
        };
        let handlers = self.handlers.clone();
        Subscription::new(move || {
            handlers.borrow_mut()[slot] = None;
        })
    }
}

#[test]
fn eight_item_click_scenario() {
    let (mut scene, counts) = scene_with_recorder(SceneConfig::default());
    assert_eq!(scene.registry().len(), 8);
    let seed0 = scene.seed();

    scene.handle(&InputEvent::ItemClick(3));
    assert_eq!(scene.focused(), Some(3));
    assert_eq!(
        scene.registry().get(3).map(|i| i.id.as_str()),
        Some("export2")
    );
    assert_eq!(counts.borrow().rearranges, 0);

    scene.handle(&InputEvent::ItemClick(3));
    assert_eq!(scene.focused(), None);
    assert_eq!(counts.borrow().rearranges, 1);
    let seed1 = scene.seed();
    assert!(seed1.value() > seed0.value());

    scene.handle(&InputEvent::BackgroundClick);
    assert_eq!(scene.focused(), None);
    assert_eq!(counts.borrow().rearranges, 2);
    assert!(scene.seed().value() > seed1.value());
    assert_eq!(counts.borrow().focus, vec![true, false]);
    assert_eq!(counts.borrow().flashes, 2);
}

#[test]
fn background_click_defocuses_and_rearranges() {
    let (mut scene, counts) = scene_with_recorder(SceneConfig::default());
    scene.handle(&InputEvent::ItemClick(5));
    let before = scene.layout().to_vec();
    scene.handle(&InputEvent::BackgroundClick);
    assert_eq!(scene.focused(), None);
    assert_eq!(counts.borrow().rearranges, 1);
    assert_ne!(before, scene.layout());
    let out = scene.frame(REFERENCE_FRAME_SEC);
    assert!(out.flash);
    assert!(!out.scene_focused);
}

#[test]
fn flash_ends_after_its_duration() {
    let (mut scene, _) = scene_with_recorder(SceneConfig::default());
    scene.handle(&InputEvent::BackgroundClick);
    assert!(scene.frame(REFERENCE_FRAME_SEC).flash);
    let mut frames = 0;
    while scene.frame(REFERENCE_FRAME_SEC).flash {
        frames += 1;
        assert!(frames < 30);
    }
    assert!(frames >= 10);
}

#[test]
fn modal_blurs_without_touching_focus() {
    let (mut scene, counts) = scene_with_recorder(SceneConfig::default());
    scene.handle(&InputEvent::ItemClick(1));
    scene.handle(&InputEvent::OpenModal(Modal::Contact));
    assert_eq!(scene.focused(), Some(1));
    assert_eq!(scene.modal(), Some(Modal::Contact));
    assert!(scene.frame(REFERENCE_FRAME_SEC).blurred);
    // Clicking the blurred scene just closes the modal
    scene.handle(&InputEvent::BackgroundClick);
    assert_eq!(scene.modal(), None);
    assert_eq!(scene.focused(), Some(1));
    assert_eq!(counts.borrow().blur, vec![true, false]);
    assert_eq!(counts.borrow().rearranges, 0);
    assert_eq!(counts.borrow().flashes, 1);
}

#[test]
fn defocus_first_policy_rearranges_on_switch() {
    let config = SceneConfig {
        policy: FocusPolicy::DefocusFirst,
        ..SceneConfig::default()
    };
    let (mut scene, counts) = scene_with_recorder(config);
    scene.handle(&InputEvent::ItemClick(0));
    scene.handle(&InputEvent::ItemClick(4));
    assert_eq!(scene.focused(), Some(4));
    assert_eq!(counts.borrow().rearranges, 1);
    assert_eq!(counts.borrow().focus, vec![true, false, true]);
}

#[test]
fn wheel_accumulates_until_clamped() {
    let (mut scene, _) = scene_with_recorder(SceneConfig::default());
    let mut prev = scene.parallax().scroll;
    for _ in 0..50 {
        scene.handle(&InputEvent::Wheel {
            delta_x: 80.0,
            delta_y: -120.0,
        });
        let s = scene.parallax().scroll;
        assert!(s.x >= prev.x && s.y <= prev.y);
        assert!(s.x <= SCROLL_CLAMP && s.y >= -SCROLL_CLAMP);
        prev = s;
    }
    assert_eq!(prev, Vec2::new(SCROLL_CLAMP, -SCROLL_CLAMP));

    // Frames decay it back to rest
    for _ in 0..400 {
        scene.frame(REFERENCE_FRAME_SEC);
    }
    assert_eq!(scene.parallax().scroll, Vec2::ZERO);
}

#[test]
fn links_are_derived_from_stepped_positions() {
    let (mut scene, _) = scene_with_recorder(SceneConfig::default());
    let out = scene.frame(REFERENCE_FRAME_SEC);
    assert_eq!(out.items.len(), 8);
    assert_eq!(out.links.len(), out.segments.len());
    for link in &out.links {
        assert!(link.a < link.b);
        let a = out.items[link.a].transform.position;
        let b = out.items[link.b].transform.position;
        assert!(a.distance(b) < 16.0);
    }
}

#[test]
fn click_picks_tile_under_pointer() {
    let items = vec![MediaItem::new("solo", "/solo.mp4", "Solo", "Only one", 1.0)];
    let registry = MediaRegistry::new(items).unwrap();
    let mut scene = Scene::new(registry, Viewport::default(), SceneConfig::default());
    scene.frame(REFERENCE_FRAME_SEC);

    // Centre of the screen is empty: the lone tile sits at +x
    scene.handle(&InputEvent::Click { ndc: Vec2::ZERO });
    assert_eq!(scene.focused(), None);

    let pos = scene.transforms()[0].position;
    let clip = scene.camera().view_proj() * pos.extend(1.0);
    let ndc = clip.xy() / clip.w;
    scene.handle(&InputEvent::Click { ndc });
    assert_eq!(scene.focused(), Some(0));
}

#[test]
fn subscription_routes_events_until_dropped() {
    let scene = Rc::new(RefCell::new(Scene::new(
        default_registry(),
        Viewport::default(),
        SceneConfig::default(),
    )));
    let mut source = ManualSource::default();
    let sub = Scene::attach(&scene, &mut source);
    assert_eq!(source.live_handlers(), 1);

    source.emit(InputEvent::ItemClick(2));
    assert_eq!(scene.borrow().focused(), Some(2));
    source.emit(InputEvent::PointerMove {
        ndc: Vec2::new(0.5, -0.5),
    });
    assert_eq!(scene.borrow().parallax().pointer, Vec2::new(0.5, -0.5));

    drop(sub);
    assert_eq!(source.live_handlers(), 0);
    source.emit(InputEvent::ItemClick(2));
    assert_eq!(scene.borrow().focused(), Some(2));
}

#[test]
fn viewport_class_change_regenerates_layout() {
    let (mut scene, _) = scene_with_recorder(SceneConfig::default());
    let desktop_radius = scene.layout()[3].length();
    scene.set_viewport(Viewport::from_css_size(390.0, 844.0));
    assert_eq!(scene.viewport().class, ViewportClass::Mobile);
    let mobile_radius = scene.layout()[3].length();
    assert!(mobile_radius < desktop_radius);
    scene.handle(&InputEvent::ItemClick(0));
    let out = scene.frame(REFERENCE_FRAME_SEC);
    assert!(out.scene_focused);
    assert_eq!(
        scene.resolution().targets[0].position,
        Viewport::from_css_size(390.0, 844.0).profile().focused_position
    );
}

#[test]
fn empty_registry_runs_frames() {
    let mut scene = Scene::new(
        MediaRegistry::default(),
        Viewport::default(),
        SceneConfig::default(),
    );
    scene.handle(&InputEvent::ItemClick(0));
    scene.handle(&InputEvent::Click { ndc: Vec2::ZERO });
    let out = scene.frame(REFERENCE_FRAME_SEC);
    assert!(out.items.is_empty());
    assert!(out.links.is_empty());
}
