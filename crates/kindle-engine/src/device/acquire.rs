use std::future::Future;

use super::GpuError;

/// Backend seam for the two-step acquisition chain.
///
/// `request_device` consumes the adapter: once a device exists the adapter is
/// only reachable through whatever `Device` chooses to keep.
pub trait GpuSource {
    type Adapter;
    type Device;

    fn request_adapter(&self) -> impl Future<Output = Result<Self::Adapter, GpuError>>;

    fn request_device(
        &self,
        adapter: Self::Adapter,
    ) -> impl Future<Output = Result<Self::Device, GpuError>>;
}

/// Progress of a [`DeviceAcquisition`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AcquireState {
    AwaitingAdapter,
    AwaitingDevice,
    Ready,
    Failed,
}

/// Adapter → device negotiation as an explicit state machine.
///
/// Runs at most once. Either step failing moves it to `Failed`, and the
/// error of that step is returned.
pub struct DeviceAcquisition<'s, S: GpuSource> {
    source: &'s S,
    state: AcquireState,
}

impl<'s, S: GpuSource> DeviceAcquisition<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            state: AcquireState::AwaitingAdapter,
        }
    }

    pub fn state(&self) -> AcquireState {
        self.state
    }

    pub async fn run(&mut self) -> Result<S::Device, GpuError> {
        if self.state != AcquireState::AwaitingAdapter {
            return Err(GpuError::AcquisitionFinished);
        }

        let adapter = match self.source.request_adapter().await {
            Ok(adapter) => adapter,
            Err(err) => {
                self.state = AcquireState::Failed;
                log::error!("adapter request failed: {err}");
                return Err(err);
            }
        };

        self.state = AcquireState::AwaitingDevice;
        log::debug!("adapter acquired; requesting device");

        match self.source.request_device(adapter).await {
            Ok(device) => {
                self.state = AcquireState::Ready;
                log::info!("GPU device ready");
                Ok(device)
            }
            Err(err) => {
                self.state = AcquireState::Failed;
                log::error!("device request failed: {err}");
                Err(err)
            }
        }
    }
}

/// Runs the acquisition chain and hands the device to `on_ready`.
///
/// `on_ready` is called exactly once on success and never on failure, so
/// nothing built inside it exists when either request fails.
pub async fn acquire_device<S, T, F, Fut>(source: &S, on_ready: F) -> Result<T, GpuError>
where
    S: GpuSource,
    F: FnOnce(S::Device) -> Fut,
    Fut: Future<Output = Result<T, GpuError>>,
{
    let device = DeviceAcquisition::new(source).run().await?;
    on_ready(device).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeSource {
        fail_adapter: bool,
        fail_device: bool,
        adapter_requests: Cell<u32>,
        device_requests: Cell<u32>,
    }

    struct FakeAdapter(u32);

    #[derive(Debug, PartialEq)]
    struct FakeDevice(u32);

    impl GpuSource for FakeSource {
        type Adapter = FakeAdapter;
        type Device = FakeDevice;

        async fn request_adapter(&self) -> Result<FakeAdapter, GpuError> {
            self.adapter_requests.set(self.adapter_requests.get() + 1);
            if self.fail_adapter {
                Err(GpuError::AdapterUnavailable("no adapter".into()))
            } else {
                Ok(FakeAdapter(7))
            }
        }

        async fn request_device(&self, adapter: FakeAdapter) -> Result<FakeDevice, GpuError> {
            self.device_requests.set(self.device_requests.get() + 1);
            if self.fail_device {
                Err(GpuError::DeviceRequestFailed("lost".into()))
            } else {
                Ok(FakeDevice(adapter.0))
            }
        }
    }

    #[test]
    fn success_walks_to_ready() {
        let source = FakeSource::default();
        let mut acq = DeviceAcquisition::new(&source);
        assert_eq!(acq.state(), AcquireState::AwaitingAdapter);

        let device = pollster::block_on(acq.run()).unwrap();
        assert_eq!(device, FakeDevice(7));
        assert_eq!(acq.state(), AcquireState::Ready);
        assert_eq!(source.adapter_requests.get(), 1);
        assert_eq!(source.device_requests.get(), 1);
    }

    #[test]
    fn adapter_failure_never_requests_device() {
        let source = FakeSource {
            fail_adapter: true,
            ..FakeSource::default()
        };
        let mut acq = DeviceAcquisition::new(&source);

        let err = pollster::block_on(acq.run()).unwrap_err();
        assert!(matches!(err, GpuError::AdapterUnavailable(_)));
        assert_eq!(acq.state(), AcquireState::Failed);
        assert_eq!(source.device_requests.get(), 0);
    }

    #[test]
    fn device_failure_is_fatal_too() {
        let source = FakeSource {
            fail_device: true,
            ..FakeSource::default()
        };
        let mut acq = DeviceAcquisition::new(&source);

        let err = pollster::block_on(acq.run()).unwrap_err();
        assert!(matches!(err, GpuError::DeviceRequestFailed(_)));
        assert_eq!(acq.state(), AcquireState::Failed);
        assert_eq!(source.adapter_requests.get(), 1);
    }

    #[test]
    fn second_run_is_rejected() {
        let source = FakeSource::default();
        let mut acq = DeviceAcquisition::new(&source);
        pollster::block_on(acq.run()).unwrap();

        let err = pollster::block_on(acq.run()).unwrap_err();
        assert!(matches!(err, GpuError::AcquisitionFinished));
        assert_eq!(source.adapter_requests.get(), 1);
    }

    #[test]
    fn continuation_runs_once_with_the_device() {
        let source = FakeSource::default();
        let calls = Cell::new(0);

        let out = pollster::block_on(acquire_device(&source, |device| {
            calls.set(calls.get() + 1);
            async move { Ok(device.0 * 2) }
        }))
        .unwrap();

        assert_eq!(out, 14);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn continuation_skipped_on_adapter_failure() {
        let source = FakeSource {
            fail_adapter: true,
            ..FakeSource::default()
        };
        let calls = Cell::new(0);

        let res = pollster::block_on(acquire_device(&source, |_device| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));

        assert!(res.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn continuation_error_propagates() {
        let source = FakeSource::default();
        let res: Result<(), _> = pollster::block_on(acquire_device(&source, |_device| async {
            Err(GpuError::UnsupportedSurface("format Bgra8Unorm".into()))
        }));
        assert!(matches!(res, Err(GpuError::UnsupportedSurface(_))));
    }
}
