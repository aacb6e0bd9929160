mod common;

mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use myrtio_strip_modes::config::DEFAULT_IDLE_PACE;
    use myrtio_strip_modes::effect::EffectSlot;
    use myrtio_strip_modes::{
        ConfigError, ConnectivityGate, Duration, EngineConfig, FrameSink, FrameTiming, Grb,
        ModeEngine, ModeId, ModeSelector, TransmitError, TransmitPipeline,
    };
    use proptest::prelude::*;

    use super::common::{ConnectingDelay, MockTransmitter, RecordingDelay, RecordingSink};

    const CYAN: Grb = Grb::new(50, 0, 50);
    const MAGENTA: Grb = Grb::new(0, 50, 50);

    #[test]
    fn test_default_mode_renders_rainbow() {
        let selector = ModeSelector::default();
        let mut engine = ModeEngine::<300>::new(&selector, &EngineConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        engine.tick(&mut sink).unwrap();

        assert_eq!(sink.frames.len(), 3);
        assert_eq!(engine.frame().get(0), Some(Grb::new(0, 25, 0)));
        assert_eq!(engine.frame().get(100), Some(Grb::new(25, 0, 0)));
    }

    #[test]
    fn test_unknown_mode_is_a_no_op() {
        let selector = ModeSelector::new(3);
        let mut engine = ModeEngine::<16>::new(&selector, &EngineConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        engine.tick(&mut sink).unwrap();
        engine.tick(&mut sink).unwrap();

        assert!(sink.frames.is_empty());
        assert_eq!(sink.idles, vec![DEFAULT_IDLE_PACE, DEFAULT_IDLE_PACE]);
        assert!(engine.frame().pixels().iter().all(|led| *led == Grb::BLACK));
    }

    #[test]
    fn test_no_op_keeps_previous_frame() {
        let selector = ModeSelector::new(ModeId::Sparkle.raw());
        let mut engine = ModeEngine::<16>::new(&selector, &EngineConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        engine.tick(&mut sink).unwrap();
        let before = engine.frame().clone();

        selector.set(99);
        engine.tick(&mut sink).unwrap();

        assert_eq!(engine.frame(), &before);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.idles.len(), 1);
    }

    #[test]
    fn test_mode_resumes_where_it_left_off() {
        let selector = ModeSelector::new(ModeId::NeonStripes.raw());
        let mut engine = ModeEngine::<300>::new(&selector, &EngineConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        for _ in 0..7 {
            engine.tick(&mut sink).unwrap();
        }

        selector.set_mode(ModeId::Off);
        for _ in 0..3 {
            engine.tick(&mut sink).unwrap();
        }

        selector.set_mode(ModeId::NeonStripes);
        engine.tick(&mut sink).unwrap();

        let frame = sink.last_frame();
        assert!(frame[0..3].iter().all(|led| *led == CYAN));
        assert!(frame[3..13].iter().all(|led| *led == MAGENTA));
        assert_eq!(frame[13], CYAN);

        let Some(EffectSlot::NeonStripes(chase)) = engine.slot(ModeId::NeonStripes) else {
            panic!("neon stripes slot missing");
        };
        assert_eq!(chase.offset(), 8);
    }

    #[test]
    fn test_frame_timing_per_mode() {
        let expected = [
            (ModeId::Off, FrameTiming::free_running(100)),
            (ModeId::RainbowChase, FrameTiming::synced(10)),
            (ModeId::WaterlooChase, FrameTiming::synced(50)),
            (ModeId::Breathing, FrameTiming::free_running(20)),
            (ModeId::Sparkle, FrameTiming::free_running(100)),
            (ModeId::Fire, FrameTiming::free_running(30)),
            (ModeId::NeonStripes, FrameTiming::free_running(40)),
            (ModeId::Lightning, FrameTiming::synced(20)),
            (ModeId::Christmas, FrameTiming::synced(60)),
            (ModeId::NewYear, FrameTiming::free_running(25)),
            (ModeId::CollisionFireworks, FrameTiming::free_running(40)),
        ];

        let selector = ModeSelector::default();
        let mut engine = ModeEngine::<30>::new(&selector, &EngineConfig::default()).unwrap();
        for (mode, timing) in expected {
            let mut sink = RecordingSink::default();
            selector.set_mode(mode);
            engine.tick(&mut sink).unwrap();
            assert_eq!(sink.last_timing(), timing, "timing of {}", mode.as_str());
        }
    }

    #[test]
    fn test_selector_written_from_another_thread() {
        static SELECTOR: ModeSelector = ModeSelector::new(1);

        let mut engine = ModeEngine::<20>::new(&SELECTOR, &EngineConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        std::thread::spawn(|| SELECTOR.set(0))
            .join()
            .expect("control thread panicked");

        engine.tick(&mut sink).unwrap();
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.last_timing(), FrameTiming::free_running(100));
        assert!(sink.last_frame().iter().all(|led| *led == Grb::BLACK));
    }

    #[test]
    fn test_failed_transmission_counts_dropped_tick() {
        let selector = ModeSelector::new(ModeId::Fire.raw());
        let config = EngineConfig::default();
        let mut engine = ModeEngine::<8>::new(&selector, &config).unwrap();
        let transmitter = MockTransmitter {
            reject: true,
            ..Default::default()
        };
        let mut pipeline =
            TransmitPipeline::new(transmitter, RecordingDelay::default(), &config).unwrap();

        assert_eq!(engine.tick(&mut pipeline), Err(TransmitError::Rejected));
        assert_eq!(engine.dropped_ticks(), 1);
        // Pacing still applied
        assert_eq!(pipeline.delay().millis, vec![30]);

        pipeline.transmitter_mut().reject = false;
        assert_eq!(engine.tick(&mut pipeline), Ok(()));
        assert_eq!(engine.dropped_ticks(), 1);
        assert_eq!(pipeline.transmitter().sent.len(), 1);
        assert_eq!(pipeline.transmitter().sent[0].len(), 8 * 3);
    }

    #[test]
    fn test_zero_idle_pace_rejected() {
        let selector = ModeSelector::new(3);
        let config = EngineConfig {
            idle_pace: Duration::from_ticks(0),
            ..EngineConfig::default()
        };

        assert!(matches!(
            ModeEngine::<8>::new(&selector, &config),
            Err(ConfigError::ZeroIdlePace)
        ));
        assert!(matches!(
            TransmitPipeline::new(MockTransmitter::default(), RecordingDelay::default(), &config),
            Err(ConfigError::ZeroIdlePace)
        ));
    }

    #[test]
    fn test_zero_completion_timeout_rejected() {
        let selector = ModeSelector::default();
        let config = EngineConfig {
            completion_timeout: Duration::from_ticks(0),
            ..EngineConfig::default()
        };

        assert!(matches!(
            ModeEngine::<8>::new(&selector, &config),
            Err(ConfigError::ZeroTimeout)
        ));
    }

    /// Sink that records whether the gate was open and then leaves the loop
    struct StopOnFirstFrame<'a> {
        gate: &'a ConnectivityGate,
        gate_open_on_submit: Option<bool>,
    }

    impl FrameSink for StopOnFirstFrame<'_> {
        fn submit(&mut self, _pixels: &[Grb], _timing: FrameTiming) -> Result<(), TransmitError> {
            self.gate_open_on_submit = Some(self.gate.is_connected());
            panic!("animation loop stopped");
        }

        fn idle(&mut self, _pace: Duration) {
            panic!("unexpected idle tick");
        }
    }

    #[test]
    fn test_loop_waits_for_network() {
        let selector = ModeSelector::new(ModeId::Fire.raw());
        let gate = ConnectivityGate::new();
        let mut engine = ModeEngine::<8>::new(&selector, &EngineConfig::default()).unwrap();
        let mut delay = ConnectingDelay::new(&gate, 4);
        let mut sink = StopOnFirstFrame {
            gate: &gate,
            gate_open_on_submit: None,
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            engine.run_when_connected(&gate, &mut delay, &mut sink);
        }));

        assert!(result.is_err());
        assert_eq!(delay.millis, vec![100, 100, 100, 100]);
        assert_eq!(sink.gate_open_on_submit, Some(true));
    }

    proptest! {
        #[test]
        fn test_frames_stay_dim(mode_index in 0usize..11, ticks in 1usize..160) {
            let mode = ModeId::CATALOG[mode_index];
            let selector = ModeSelector::new(mode.raw());
            let mut engine = ModeEngine::<60>::new(&selector, &EngineConfig::default()).unwrap();
            let mut sink = RecordingSink::default();

            for _ in 0..ticks {
                engine.tick(&mut sink).unwrap();
            }

            for (frame, _) in &sink.frames {
                prop_assert_eq!(frame.len(), 60);
                for led in frame {
                    prop_assert!(led.g <= 60 && led.r <= 60 && led.b <= 60);
                }
            }
        }
    }
}
