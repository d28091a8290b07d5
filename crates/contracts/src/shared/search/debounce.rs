//! Отложенная публикация значения (debounce).
//!
//! Таймер не привязан к конкретному источнику времени: все методы принимают
//! текущее время в миллисекундах. В браузере время берётся из `Date.now()`,
//! в тестах подставляется виртуальное.

/// Окно ожидания по умолчанию для строки поиска
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    deadline: u64,
}

/// Отменяемый таймер с перезапуском на каждом новом значении
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce<T> {
    window_ms: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debounce<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Новое значение отменяет ожидающее и перезапускает окно.
    /// Возвращает момент, когда значение станет устоявшимся.
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(self.window_ms);
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Отдаёт значение, если с последнего `push` прошло полное окно
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Отдаёт ожидающее значение немедленно.
    /// Используется реальным таймером, который срабатывает только для последнего `push`.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Сколько осталось ждать от `now_ms` до срабатывания
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline().map(|d| d.saturating_sub(now_ms))
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_value_propagates() {
        let mut d = Debounce::new(300);
        let mut fired = Vec::new();

        d.push("a", 0);
        if let Some(v) = d.poll(100) {
            fired.push(v);
        }
        d.push("ab", 100);
        if let Some(v) = d.poll(250) {
            fired.push(v);
        }
        d.push("abc", 250);

        // Каждый тик виртуальных часов до 1000 мс
        for now in (250..=1000).step_by(10) {
            if let Some(v) = d.poll(now) {
                fired.push(v);
            }
        }

        assert_eq!(fired, vec!["abc"]);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_poll_before_deadline_keeps_value() {
        let mut d = Debounce::new(300);
        assert_eq!(d.push(1, 1000), 1300);
        assert_eq!(d.poll(1299), None);
        assert_eq!(d.remaining(1200), Some(100));
        assert_eq!(d.poll(1300), Some(1));
        assert_eq!(d.poll(5000), None);
    }

    #[test]
    fn test_cancel_and_flush() {
        let mut d = Debounce::default();
        assert_eq!(d.window_ms(), SEARCH_DEBOUNCE_MS);

        d.push("x", 0);
        d.cancel();
        assert_eq!(d.poll(10_000), None);

        d.push("y", 0);
        assert_eq!(d.flush(), Some("y"));
        assert_eq!(d.flush(), None);
        assert_eq!(d.deadline(), None);
    }
}
