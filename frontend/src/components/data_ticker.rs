use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerState {
    pub index: usize,
    pub visible: bool,
    len: usize,
}

pub enum TickerAction {
    Hide,
    Advance,
}

impl TickerState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, visible: true, len }
    }
}

impl Reducible for TickerState {
    type Action = TickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TickerAction::Hide => Rc::new(Self { visible: false, ..(*self).clone() }),
            TickerAction::Advance => {
                let index = if self.len == 0 { 0 } else { (self.index + 1) % self.len };
                Rc::new(Self { index, visible: true, len: self.len })
            }
        }
    }
}

#[function_component(DataTicker)]
pub fn data_ticker() -> Html {
    let ticker = use_reducer(|| TickerState::new(config::TICKER_ITEMS.len()));

    {
        let dispatcher = ticker.dispatcher();
        use_effect_with_deps(
            move |_| {
                let swap: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let swap_for_tick = swap.clone();
                let interval = Interval::new(config::TICKER_INTERVAL_MS, move || {
                    dispatcher.dispatch(TickerAction::Hide);
                    let dispatcher = dispatcher.clone();
                    *swap_for_tick.borrow_mut() =
                        Some(Timeout::new(config::TICKER_SWAP_DELAY_MS, move || {
                            dispatcher.dispatch(TickerAction::Advance);
                        }));
                });
                move || {
                    drop(interval);
                    swap.borrow_mut().take();
                }
            },
            (),
        );
    }

    let opacity = if ticker.visible { "opacity: 1;" } else { "opacity: 0;" };

    html! {
        <div class="data-ticker" style={opacity} aria-live="polite">
            { config::TICKER_ITEMS[ticker.index] }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: TickerState, action: TickerAction) -> TickerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn hide_keeps_index() {
        let hidden = step(TickerState::new(3), TickerAction::Hide);
        assert_eq!(hidden.index, 0);
        assert!(!hidden.visible);
    }

    #[test]
    fn advance_wraps_and_shows() {
        let mut state = TickerState::new(3);
        for expected in [1, 2, 0, 1] {
            state = step(state, TickerAction::Hide);
            state = step(state, TickerAction::Advance);
            assert_eq!(state.index, expected);
            assert!(state.visible);
        }
    }

    #[test]
    fn empty_ticker_stays_at_zero() {
        let state = step(TickerState::new(0), TickerAction::Advance);
        assert_eq!(state.index, 0);
    }
}
