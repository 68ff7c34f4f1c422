//! スクロール監視のLeptos連携
//!
//! `ScrollObserver` を `StoredValue` に保持し、scroll/resizeイベントごとに
//! `tick` する。結果はシグナルとして公開し、コンポーネントは
//! `use_page_observer` / `use_entrance` で購読する。

use crate::viewport::WindowViewport;
use gloo::console::log;
use leptos::ev;
use leptos::prelude::*;
use portfolio_common::{ObserverConfig, ScrollObserver, ScrollState, SectionRegistry};
use std::collections::HashSet;

#[derive(Clone, Copy)]
pub struct PageObserver {
    controller: StoredValue<ScrollObserver>,
    state: RwSignal<ScrollState>,
    visible: RwSignal<HashSet<String>>,
}

impl PageObserver {
    pub fn state(&self) -> ReadSignal<ScrollState> {
        self.state.read_only()
    }

    /// 現在位置で再評価し、変化があったものだけシグナルに反映する
    pub fn tick(&self) {
        let Some(viewport) = WindowViewport::current() else {
            return;
        };
        let Some(report) = self.controller.try_update_value(|o| o.tick(&viewport)) else {
            return;
        };

        if report.state_changed {
            if let Some(state) = self.controller.try_with_value(|o| o.state().clone()) {
                self.state.set(state);
            }
        }
        if !report.revealed.is_empty() || !report.hidden.is_empty() {
            self.visible.update(|visible| {
                for id in &report.hidden {
                    visible.remove(id);
                }
                visible.extend(report.revealed);
            });
        }
    }
}

/// ページ全体の監視を開始してコンテキストに登録する
///
/// 最初のフレーム描画後に表示判定を有効にする。所有者の破棄時に
/// リスナーを外し、全要素の監視を解除する。
pub fn provide_page_observer(registry: SectionRegistry, config: ObserverConfig) -> PageObserver {
    let mut controller = ScrollObserver::new(registry, config);
    controller.attach();

    let observer = PageObserver {
        controller: StoredValue::new(controller),
        state: RwSignal::new(ScrollState::default()),
        visible: RwSignal::new(HashSet::new()),
    };

    let scroll = window_event_listener(ev::scroll, move |_| observer.tick());
    let resize = window_event_listener(ev::resize, move |_| observer.tick());
    let first_paint = request_animation_frame_with_handle(move || {
        observer.controller.update_value(|o| o.mark_painted());
        observer.tick();
    })
    .ok();

    on_cleanup(move || {
        scroll.remove();
        resize.remove();
        if let Some(handle) = first_paint {
            handle.cancel();
        }
        let _ = observer.controller.try_update_value(|o| o.detach());
        log!("page observer detached");
    });

    log!("page observer attached");
    provide_context(observer);
    observer
}

pub fn use_page_observer() -> PageObserver {
    expect_context::<PageObserver>()
}

/// 要素が一度ビューポートに入ったら `true` になるシグナル
///
/// 一度表示された要素は監視から外れ、以後 `false` に戻らない。
pub fn use_entrance(element_id: &'static str) -> Signal<bool> {
    let observer = use_page_observer();
    observer.controller.update_value(|o| o.watch(element_id, true));

    on_cleanup(move || {
        let _ = observer.controller.try_update_value(|o| o.unwatch(element_id));
    });

    let visible = observer.visible;
    Signal::derive(move || visible.with(|v| v.contains(element_id)))
}
