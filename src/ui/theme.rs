//! Shared style helpers so pages and components stay visually consistent.

#![allow(dead_code)]

use crate::domain::ChatRole;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:cursor-not-allowed disabled:opacity-50"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn btn_quiet() -> &'static str {
    "rounded-lg border border-slate-700 px-3 py-1.5 text-xs font-semibold uppercase tracking-wide text-slate-400 hover:border-sky-600 hover:text-sky-300"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-lg px-5 py-2.5 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40"
    } else {
        "rounded-lg px-5 py-2.5 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300"
    }
}

pub fn preset_button() -> &'static str {
    "rounded px-2 py-1 text-xs text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
}

pub fn select_class() -> &'static str {
    "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2.5 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn panel_accent() -> &'static str {
    "rounded-xl border border-sky-800/50 bg-sky-950/30"
}

pub fn rate_card_border(preferred: bool) -> &'static str {
    if preferred {
        "rounded-xl border border-amber-500/50 bg-slate-900/60 shadow-lg shadow-amber-500/10"
    } else {
        "rounded-xl border border-slate-800 bg-slate-900/60"
    }
}

// ============================================
// CHAT STYLES
// ============================================

pub fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "ml-auto max-w-[80%] rounded-2xl rounded-br-sm bg-sky-600 px-4 py-3 text-sm text-white",
        ChatRole::Assistant => "mr-auto max-w-[90%] rounded-2xl rounded-bl-sm border border-slate-800 bg-slate-900/70 px-4 py-3 text-sm text-slate-200",
    }
}

pub fn bubble_meta(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "mt-1 text-right text-[10px] text-sky-200/60",
        ChatRole::Assistant => "mt-1 text-[10px] text-slate-500",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary() -> &'static str {
    "text-sky-300"
}

pub fn text_secondary() -> &'static str {
    "text-slate-300"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

pub fn accent_text() -> &'static str {
    "text-emerald-400"
}
