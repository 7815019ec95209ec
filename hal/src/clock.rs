pub type Instant = fugit::TimerInstantU64<1_000_000>;
pub type Duration = fugit::MicrosDurationU64;

/// Monotonic clock, epoch being system startup
pub trait Clock {
    fn now(&self) -> Instant;
}
