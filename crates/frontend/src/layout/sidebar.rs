use leptos::prelude::*;

use crate::shared::icons::icon;

struct NavItem {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

const MANAGEMENT: [NavItem; 7] = [
    NavItem { href: "/", icon: "home", label: "Dashboard" },
    NavItem { href: "/employees", icon: "users", label: "Employees" },
    NavItem { href: "/interns", icon: "users", label: "Interns" },
    NavItem { href: "/leave", icon: "calendar", label: "Leave" },
    NavItem { href: "/salary", icon: "file-text", label: "Salary" },
    NavItem { href: "/hiring", icon: "briefcase", label: "Hiring" },
    NavItem { href: "/evaluations", icon: "award", label: "Evaluations" },
];

const WEBSITE: [NavItem; 3] = [
    NavItem { href: "/website/portfolio", icon: "globe", label: "Portfolio" },
    NavItem { href: "/website/positions", icon: "briefcase", label: "Positions" },
    NavItem { href: "/website/culture", icon: "globe", label: "Culture" },
];

// Plain anchors: the router intercepts same-origin clicks, so these stay
// client-side navigations.
fn nav_link(item: &NavItem) -> impl IntoView {
    view! {
        <a href=item.href class="sidebar__link">
            {icon(item.icon)}
            <span>{item.label}</span>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__section">
                <div class="sidebar__heading">"Management"</div>
                {MANAGEMENT.iter().map(nav_link).collect_view()}
            </div>
            <div class="sidebar__section">
                <div class="sidebar__heading">"Website"</div>
                {WEBSITE.iter().map(nav_link).collect_view()}
            </div>
        </nav>
    }
}
