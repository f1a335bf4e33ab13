use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Launch(Viewport),
    Load(String),
    Capture,
    Close,
}

#[derive(Default)]
struct FakeLauncher {
    events: Rc<RefCell<Vec<Event>>>,
    fail_capture_at: Option<usize>,
}

struct FakeSurface {
    events: Rc<RefCell<Vec<Event>>>,
    viewport: Viewport,
    captures: usize,
    fail_capture_at: Option<usize>,
}

impl SurfaceLauncher for FakeLauncher {
    type Surface = FakeSurface;

    fn launch(&self, viewport: Viewport) -> Svg2GifResult<FakeSurface> {
        self.events.borrow_mut().push(Event::Launch(viewport));
        Ok(FakeSurface {
            events: Rc::clone(&self.events),
            viewport,
            captures: 0,
            fail_capture_at: self.fail_capture_at,
        })
    }
}

impl RenderSurface for FakeSurface {
    fn load(&mut self, url: &Url) -> Svg2GifResult<()> {
        self.events.borrow_mut().push(Event::Load(url.to_string()));
        Ok(())
    }

    fn capture_png(&mut self) -> Svg2GifResult<Vec<u8>> {
        if self.fail_capture_at == Some(self.captures) {
            return Err(Svg2GifError::capture("renderer crashed"));
        }
        self.captures += 1;
        self.events.borrow_mut().push(Event::Capture);

        let img = image::RgbaImage::from_pixel(
            self.viewport.width,
            self.viewport.height,
            image::Rgba([self.captures as u8, 0, 0, 255]),
        );
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        Ok(png)
    }

    fn close(self) -> Svg2GifResult<()> {
        self.events.borrow_mut().push(Event::Close);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, d: Duration) {
        self.pauses.push(d);
    }
}

fn opts(fps: f64, frame_count: u64) -> CaptureOpts {
    CaptureOpts {
        viewport: Viewport {
            width: 8,
            height: 6,
        },
        fps: Fps(fps),
        frame_count,
        delay: Duration::from_millis(1000),
    }
}

fn document(dir: &Path) -> PathBuf {
    let path = dir.join("wave.svg");
    std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    path
}

#[test]
fn captures_exactly_frame_count_ordered_frames() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = document(tmp.path());
    let ws = Workspace::prepare(tmp.path().join("frames")).unwrap();
    let launcher = FakeLauncher::default();
    let mut pacer = RecordingPacer::default();
    let mut progress = Vec::new();

    let set = capture_frames(
        &launcher,
        &doc,
        &opts(4.0, 12),
        &ws,
        &mut pacer,
        &mut |idx: FrameIndex, total: u64| progress.push((idx.0, total)),
    )
    .unwrap();

    assert_eq!(set.len, 12);
    assert_eq!(set.fps, Fps(4.0));
    assert_eq!(set.pattern, ws.input_pattern());

    let frames = ws.frames().unwrap();
    assert_eq!(frames.len(), 12);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame, &ws.frame_path(FrameIndex(i as u64)));
        let decoded = image::open(frame).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    let expected: Vec<(u64, u64)> = (0..12).map(|i| (i, 12)).collect();
    assert_eq!(progress, expected);
}

#[test]
fn pacing_waits_for_delay_then_one_interval_between_frames() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = document(tmp.path());
    let ws = Workspace::prepare(tmp.path().join("frames")).unwrap();
    let mut pacer = RecordingPacer::default();

    capture_frames(
        &FakeLauncher::default(),
        &doc,
        &opts(4.0, 3),
        &ws,
        &mut pacer,
        &mut |_: FrameIndex, _: u64| {},
    )
    .unwrap();

    assert_eq!(
        pacer.pauses,
        vec![
            Duration::from_millis(1000),
            Duration::from_millis(250),
            Duration::from_millis(250),
        ]
    );
}

#[test]
fn surface_lifecycle_is_launch_load_capture_close() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = document(tmp.path());
    let ws = Workspace::prepare(tmp.path().join("frames")).unwrap();
    let launcher = FakeLauncher::default();

    capture_frames(
        &launcher,
        &doc,
        &opts(10.0, 2),
        &ws,
        &mut RecordingPacer::default(),
        &mut |_: FrameIndex, _: u64| {},
    )
    .unwrap();

    let url = Url::from_file_path(&doc).unwrap().to_string();
    assert!(url.starts_with("file://"));
    assert_eq!(
        *launcher.events.borrow(),
        vec![
            Event::Launch(Viewport {
                width: 8,
                height: 6
            }),
            Event::Load(url),
            Event::Capture,
            Event::Capture,
            Event::Close,
        ]
    );
}

#[test]
fn failed_capture_still_closes_the_surface() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = document(tmp.path());
    let ws = Workspace::prepare(tmp.path().join("frames")).unwrap();
    let launcher = FakeLauncher {
        fail_capture_at: Some(2),
        ..FakeLauncher::default()
    };

    let err = capture_frames(
        &launcher,
        &doc,
        &opts(10.0, 5),
        &ws,
        &mut RecordingPacer::default(),
        &mut |_: FrameIndex, _: u64| {},
    )
    .unwrap_err();

    assert!(matches!(err, Svg2GifError::Capture(_)));
    assert_eq!(launcher.events.borrow().last(), Some(&Event::Close));
    assert_eq!(ws.frames().unwrap().len(), 2);
}

#[test]
fn zero_frames_or_rate_is_rejected_before_launch() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = document(tmp.path());
    let ws = Workspace::prepare(tmp.path().join("frames")).unwrap();
    let launcher = FakeLauncher::default();

    for bad in [opts(10.0, 0), opts(0.0, 3)] {
        let err = capture_frames(
            &launcher,
            &doc,
            &bad,
            &ws,
            &mut RecordingPacer::default(),
            &mut |_: FrameIndex, _: u64| {},
        )
        .unwrap_err();
        assert!(matches!(err, Svg2GifError::Validation(_)));
    }
    assert!(launcher.events.borrow().is_empty());
}

#[test]
fn resolve_document_reports_missing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.svg");
    match resolve_document(&missing) {
        Err(Svg2GifError::InputNotFound(p)) => assert_eq!(p, missing),
        other => panic!("expected InputNotFound, got {other:?}"),
    }

    let doc = document(tmp.path());
    let resolved = resolve_document(&doc).unwrap();
    assert!(resolved.is_absolute());
}

#[test]
fn opts_follow_run_config() {
    let cfg = RunConfig {
        fps: Fps(7.0),
        duration_secs: 2.5,
        ..RunConfig::default()
    };
    let opts = CaptureOpts::from_config(&cfg).unwrap();
    assert_eq!(opts.frame_count, 17);
    assert_eq!(opts.viewport, cfg.viewport);
    assert_eq!(opts.delay, Duration::from_millis(1000));
}
