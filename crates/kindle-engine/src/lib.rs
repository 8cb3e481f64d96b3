//! Kindle engine crate.
//!
//! Owns the window runtime, GPU acquisition and the single-pipeline frame loop
//! used by the demo binary.

pub mod device;
pub mod frame;
pub mod input;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;

#[cfg(test)]
mod startup_tests {
    //! Acquisition → setup → frame loop, with fakes standing in for wgpu.

    use std::cell::Cell;

    use crate::device::{acquire_device, GpuError, GpuSource, SwapChainConfig};
    use crate::frame::{FrameBackend, FrameLoop, LoopState};
    use crate::input::{Key, KeyEvent};
    use crate::render::setup::build_render_resources;
    use crate::render::setup::tests::RecordingSetup;
    use crate::render::PipelineDesc;

    #[derive(Default)]
    struct FakeSource {
        fail_adapter: bool,
        devices_created: Cell<u32>,
    }

    impl GpuSource for FakeSource {
        type Adapter = ();
        type Device = u32;

        async fn request_adapter(&self) -> Result<(), GpuError> {
            if self.fail_adapter {
                Err(GpuError::AdapterUnavailable("none".into()))
            } else {
                Ok(())
            }
        }

        async fn request_device(&self, _adapter: ()) -> Result<u32, GpuError> {
            self.devices_created.set(self.devices_created.get() + 1);
            Ok(self.devices_created.get())
        }
    }

    struct FakeRenderer {
        device_id: u32,
        target: (u32, wgpu::TextureFormat),
        pipeline: (u32, wgpu::TextureFormat),
        submissions: u32,
        presents: u32,
    }

    impl FrameBackend for FakeRenderer {
        type Image = u32;

        fn acquire_image(&mut self) -> Result<u32, GpuError> {
            Ok(self.presents % 3)
        }

        fn submit(&mut self, _image: &u32) {
            self.submissions += 1;
        }

        fn present(&mut self, _image: u32) {
            self.presents += 1;
        }
    }

    /// Same continuation shape `Renderer::new` hands to `acquire_device`.
    fn start(source: &FakeSource, setup: &RecordingSetup) -> Result<FakeRenderer, GpuError> {
        let swap_chain = SwapChainConfig::default();
        let pipeline_desc = PipelineDesc::default();
        let (swap_chain, pipeline_desc) = (&swap_chain, &pipeline_desc);

        pollster::block_on(acquire_device(source, move |device| async move {
            let (target, pipeline) =
                build_render_resources(setup, &device, swap_chain, pipeline_desc).await?;
            Ok(FakeRenderer {
                device_id: device,
                target,
                pipeline,
                submissions: 0,
                presents: 0,
            })
        }))
    }

    #[test]
    fn n_frames_without_close_give_n_submissions_and_presents() {
        let source = FakeSource::default();
        let setup = RecordingSetup::reporting(wgpu::TextureFormat::Bgra8Unorm);
        let mut renderer = start(&source, &setup).unwrap();
        let mut lp = FrameLoop::new();

        for _ in 0..60 {
            assert_eq!(lp.step(&mut renderer).unwrap(), LoopState::Running);
        }

        assert_eq!(renderer.submissions, 60);
        assert_eq!(renderer.presents, 60);
        assert_eq!(source.devices_created.get(), 1);
        assert_eq!(setup.pipelines_built(), 1);
        assert_eq!(renderer.device_id, 1);
        assert_eq!(renderer.target, (1, wgpu::TextureFormat::Bgra8Unorm));
        assert_eq!(renderer.pipeline, (1, wgpu::TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn adapter_failure_builds_nothing() {
        let source = FakeSource {
            fail_adapter: true,
            ..FakeSource::default()
        };
        let setup = RecordingSetup::reporting(wgpu::TextureFormat::Bgra8Unorm);

        assert!(matches!(
            start(&source, &setup),
            Err(GpuError::AdapterUnavailable(_))
        ));
        assert_eq!(source.devices_created.get(), 0);
        assert!(setup.steps.borrow().is_empty());
    }

    #[test]
    fn surface_format_mismatch_stops_after_the_device() {
        let source = FakeSource::default();
        let setup = RecordingSetup::reporting(wgpu::TextureFormat::Rgba8UnormSrgb);

        assert!(matches!(
            start(&source, &setup),
            Err(GpuError::FormatMismatch { .. })
        ));
        assert_eq!(source.devices_created.get(), 1);
        assert_eq!(setup.pipelines_built(), 0);
    }

    #[test]
    fn escape_stops_frame_production() {
        let source = FakeSource::default();
        let setup = RecordingSetup::reporting(wgpu::TextureFormat::Bgra8Unorm);
        let mut renderer = start(&source, &setup).unwrap();
        let mut lp = FrameLoop::new();

        lp.step(&mut renderer).unwrap();
        lp.handle_key(KeyEvent::pressed(Key::Escape));
        lp.step(&mut renderer).unwrap();

        assert_eq!(renderer.presents, 1);
        assert_eq!(lp.state(), LoopState::Closing);
    }
}
