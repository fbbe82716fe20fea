use leptos::{ev::PointerEvent, prelude::*};
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

use super::{
    reveal::{RevealSection, Revealed},
    SectionHeading,
};
use crate::carousel::{Carousel, Direction, DragTracker, ResumeTicket, AUTOPLAY_INTERVAL};
use crate::content::{Achievement, SiteContent, Stat};
use crate::site::Section;

#[component]
pub fn Achievements() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let stats = content.achievement_stats();

    view! {
        <RevealSection section=Section::Achievements class="py-20 bg-gray-800">
            <div class="space-y-16">
                <SectionHeading
                    title="Achievements"
                    blurb="Academic achievements and competitive examination rankings that showcase my dedication to excellence in computer science and engineering."
                />
                <AchievementCarousel achievements=content.achievements />
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 reveal-item">
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(i, stat)| stat_tile(stat, i))
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn AchievementCarousel(achievements: Vec<Achievement>) -> impl IntoView {
    let carousel = match Carousel::new(achievements) {
        Ok(c) => RwSignal::new(c),
        Err(err) => {
            log::warn!("achievement carousel disabled: {err}");
            return ().into_any();
        }
    };
    let Revealed(revealed) = expect_context::<Revealed>();
    let resume_timer = StoredValue::new(None::<TimeoutHandle>);
    let drag = StoredValue::new(None::<DragTracker>);
    // follows the pointer while held, snaps back to 0 on release
    let drag_offset = RwSignal::new(0.0_f64);

    // autoplay only runs while the section has been seen and nothing paused it
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            carousel.update(|c| {
                c.tick();
            });
        },
        AUTOPLAY_INTERVAL.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );
    let playing = Memo::new(move |_| revealed.get() && carousel.with(|c| c.is_auto_playing()));
    Effect::new(move |_| {
        if playing.get() {
            resume();
        } else {
            pause();
        }
    });

    let schedule_resume = move |ticket: ResumeTicket| {
        if let Some(pending) = resume_timer.get_value() {
            pending.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                carousel.update(|c| {
                    c.resume(ticket);
                });
                resume_timer.set_value(None);
            },
            ticket.after(),
        );
        match handle {
            Ok(handle) => resume_timer.set_value(Some(handle)),
            Err(err) => log::warn!("couldn't schedule carousel resume: {err:?}"),
        }
    };

    on_cleanup(move || {
        if let Some(pending) = resume_timer.try_get_value().flatten() {
            pending.clear();
        }
    });

    let navigate = move |step: fn(&mut Carousel<Achievement>) -> ResumeTicket| {
        if let Some(ticket) = carousel.try_update(|c| step(c)) {
            schedule_resume(ticket);
        }
    };

    let finish_drag = move |ev: &PointerEvent| {
        let tracker = if let Some(tracker) = drag.get_value() {
            tracker
        } else {
            return;
        };
        drag.set_value(None);
        drag_offset.set(0.0);
        let swipe = tracker.release(ev.client_x() as f64, ev.time_stamp());
        if let Some(ticket) = carousel.try_update(|c| c.drag_release(swipe)) {
            schedule_resume(ticket);
        }
    };

    let slide = Memo::new(move |_| carousel.with(|c| (c.index(), c.direction())));
    let count = carousel.with_untracked(|c| c.items().len());

    view! {
        <div class="relative reveal-item">
            <div class="flex justify-center items-center mb-8">
                <div class="flex items-center space-x-4 text-gray-400 animate-pulse">
                    <span class="text-sm">"Drag to explore"</span>
                    <div class="flex space-x-1">
                        {(0..count)
                            .map(|i| {
                                view! {
                                    <button
                                        aria-label=format!("Show achievement {}", i + 1)
                                        class=move || {
                                            if slide.get().0 == i {
                                                "h-2 w-8 rounded-full transition-all duration-300 bg-purple-500"
                                            } else {
                                                "h-2 w-2 rounded-full transition-all duration-300 bg-gray-600"
                                            }
                                        }
                                        on:click=move |_| {
                                            match carousel.try_update(|c| c.jump_to(i)) {
                                                Some(Ok(ticket)) => schedule_resume(ticket),
                                                Some(Err(err)) => log::warn!("{err}"),
                                                None => {}
                                            }
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="relative overflow-hidden rounded-xl">
                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 z-10 p-3 bg-gray-800/80 hover:bg-gray-700 text-white rounded-full backdrop-blur-sm transition-colors"
                    aria-label="Previous achievement"
                    on:click=move |_| navigate(Carousel::previous)
                >
                    <i class="extra-chevron-left"></i>
                </button>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 z-10 p-3 bg-gray-800/80 hover:bg-gray-700 text-white rounded-full backdrop-blur-sm transition-colors"
                    aria-label="Next achievement"
                    on:click=move |_| navigate(Carousel::next)
                >
                    <i class="extra-chevron-right"></i>
                </button>

                <div
                    class="touch-pan-y select-none cursor-grab active:cursor-grabbing"
                    class:transition-transform=move || drag_offset.get() == 0.0
                    style:transform=move || format!("translateX({}px)", drag_offset.get())
                    on:pointerenter=move |_| carousel.update(|c| c.pointer_enter())
                    on:pointerleave=move |ev| {
                        finish_drag(&ev);
                        carousel.update(|c| c.pointer_leave());
                    }
                    on:pointerdown=move |ev| {
                        drag.set_value(Some(DragTracker::begin(ev.client_x() as f64, ev.time_stamp())));
                        carousel.update(|c| c.drag_start());
                    }
                    on:pointermove=move |ev| {
                        let moved = drag
                            .try_update_value(|tracker| {
                                tracker.as_mut().map(|t| {
                                    t.move_to(ev.client_x() as f64, ev.time_stamp());
                                    t.offset()
                                })
                            })
                            .flatten();
                        if let Some(offset) = moved {
                            drag_offset.set(offset);
                        }
                    }
                    on:pointerup=move |ev| finish_drag(&ev)
                    on:pointercancel=move |ev| finish_drag(&ev)
                >
                    {move || {
                        let (_, direction) = slide.get();
                        let achievement = carousel.with_untracked(|c| c.current().clone());
                        view! { <AchievementSlide achievement direction /> }
                    }}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn AchievementSlide(achievement: Achievement, direction: Direction) -> impl IntoView {
    let kind = achievement.kind.style();
    let enter = match direction {
        Direction::Forward => "slide-enter-forward",
        Direction::Backward => "slide-enter-backward",
    };

    view! {
        <div class=format!("bg-gradient-to-br from-gray-900 to-gray-800 rounded-xl p-8 lg:p-12 {enter}")>
            <div class="grid lg:grid-cols-2 gap-8 items-center">
                <div class="space-y-6">
                    <div class="flex items-center space-x-4">
                        <div class=format!(
                            "p-4 rounded-full bg-gradient-to-r {} text-white text-3xl hover:rotate-[360deg] transition-transform duration-700",
                            achievement.accent,
                        )>
                            <i class=achievement.icon.class()></i>
                        </div>
                        <div class=format!(
                            "inline-block px-3 py-1 rounded-full text-sm font-medium border {} {} {}",
                            kind.bg_class,
                            kind.text_class,
                            kind.border_class,
                        )>{kind.label}</div>
                    </div>
                    <div class="space-y-3">
                        <h3 class="text-3xl font-bold text-white">{achievement.title}</h3>
                        <div class="flex items-center space-x-4 text-purple-400">
                            <span class="font-medium">{achievement.organization}</span>
                            <span class="flex items-center space-x-1">
                                <i class="extra-calendar"></i>
                                <span>{achievement.year}</span>
                            </span>
                        </div>
                        <p class="text-gray-300 text-lg leading-relaxed">
                            {achievement.description}
                        </p>
                        {achievement
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        draggable="false"
                                        class="inline-flex items-center space-x-2 px-6 py-3 bg-purple-600 hover:bg-purple-700 text-white rounded-lg font-medium transition-colors duration-300"
                                    >
                                        <span>{link.label}</span>
                                        <i class="extra-link"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
                <div class="relative hidden lg:block">
                    <div class="w-64 h-64 mx-auto relative spin-slow">
                        <div class=format!(
                            "absolute inset-0 bg-gradient-to-r {} rounded-full opacity-20 blur-xl",
                            achievement.accent,
                        )></div>
                        <div class=format!(
                            "absolute inset-4 bg-gradient-to-r {} rounded-full flex items-center justify-center text-white text-8xl",
                            achievement.accent,
                        )>
                            <i class=achievement.icon.class()></i>
                        </div>
                        <div class="absolute -inset-4 border-2 border-purple-500/30 rounded-full"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stat_tile(stat: Stat, index: usize) -> impl IntoView {
    view! {
        <div class="bg-gray-900 rounded-xl p-6 text-center hover-lift">
            <div
                class="inline-block p-3 bg-purple-600 rounded-full mb-4 text-white spin-pulse"
                style=format!("animation-delay: {}ms", index * 500)
            >
                <i class=stat.icon.class()></i>
            </div>
            <div class="text-3xl font-bold text-white mb-2">{stat.value}</div>
            <div class="text-gray-400">{stat.label}</div>
        </div>
    }
}
