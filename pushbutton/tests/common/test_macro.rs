extern crate pushbutton;

/// Play `[pressed, duration_ms]` steps on a test bench and compare the reported
/// `[time_ms, event]` pairs.
#[macro_export]
macro_rules! button_sequence_test {
    (bench: $bench:expr, sequence: [$([$pressed:expr, $duration:expr]),* $(,)?], expected_events: [$([$time:expr, $event:expr]),* $(,)?]) => {{
        let bench = $bench;
        let mut button = bench.button(0);
        let sequence = vec![
            $(
                $crate::common::TestStep {
                    pressed: $pressed,
                    duration: $duration,
                },
            )*
        ];
        let expected_events: Vec<(u32, pushbutton::ButtonEvent)> = vec![
            $(
                ($time, $event),
            )*
        ];

        let events = bench.run(&mut button, &sequence);
        assert_eq!(
            expected_events, events,
            "expected left but actually right"
        );
    }};
}
