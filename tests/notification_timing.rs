// SPDX-License-Identifier: MPL-2.0
//! Toast lifetime properties, driven with a paused tokio clock.

use iced_showcase::ui::notifications::{
    expire_after, Manager, Notification, NotificationDuration, Severity,
};
use std::time::Duration;
use tokio::time::{advance, Instant};

fn manager() -> Manager {
    Manager::new(NotificationDuration::default())
}

#[tokio::test(start_paused = true)]
async fn toast_is_visible_until_the_duration_elapses() {
    let mut manager = manager();
    let expiry = manager.push(Notification::info("contact-sent"));
    assert_eq!(expiry.after, Duration::from_millis(3000));

    let started = Instant::now();
    let timer = tokio::spawn(expire_after(expiry));

    advance(Duration::from_millis(2999)).await;
    assert!(!timer.is_finished());
    assert!(manager.is_active());

    let id = timer.await.expect("timer task");
    assert!(started.elapsed() >= Duration::from_millis(3000));
    assert!(manager.expire(id));
    assert!(manager.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn stale_timer_never_clears_a_newer_toast() {
    let mut manager = manager();
    let first = manager.push(Notification::info("first"));
    let first_timer = tokio::spawn(expire_after(first));

    advance(Duration::from_millis(1500)).await;
    let second = manager.push(Notification::error("second"));
    let second_timer = tokio::spawn(expire_after(second));

    let stale = first_timer.await.expect("first timer");
    assert!(!manager.expire(stale));
    let current = manager.current().expect("second toast still visible");
    assert_eq!(current.key(), "second");
    assert_eq!(current.severity(), Severity::Error);

    let fresh = second_timer.await.expect("second timer");
    assert!(manager.expire(fresh));
    assert!(!manager.is_active());
}

#[tokio::test(start_paused = true)]
async fn dismiss_clears_before_expiry_and_late_timer_is_ignored() {
    let mut manager = manager();
    let expiry = manager.push(Notification::warning("notification-config-load-error"));
    let timer = tokio::spawn(expire_after(expiry));

    assert!(manager.dismiss());
    assert!(manager.current().is_none());

    let id = timer.await.expect("timer task");
    assert!(!manager.expire(id));
    assert!(!manager.dismiss());
}

#[tokio::test(start_paused = true)]
async fn configured_duration_is_clamped() {
    let mut manager = Manager::new(NotificationDuration::from_config(Some(50)));
    let expiry = manager.push(Notification::success("contact-sent"));
    assert_eq!(expiry.after, Duration::from_millis(1000));

    let started = Instant::now();
    let id = expire_after(expiry).await;
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(manager.expire(id));
}
