use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::culture::ui::list::CultureList;
use crate::domain::employees::ui::list::EmployeesList;
use crate::domain::evaluations::ui::list::EvaluationsPage;
use crate::domain::hiring::ui::list::HiringBoard;
use crate::domain::interns::ui::list::InternsList;
use crate::domain::leave::ui::list::LeaveList;
use crate::domain::portfolio::ui::list::PortfolioList;
use crate::domain::positions::ui::list::PositionsList;
use crate::domain::salary::ui::list::SalaryList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::auth::pin::PinGate;
use crate::system::pages::login::LoginPage;

/// Guarded shell: everything below it needs a token.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            // Unmatched paths land on the dashboard, behind the same guard.
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("employees") view=EmployeesList />
                    <Route path=path!("interns") view=InternsList />
                    <Route path=path!("leave") view=LeaveList />
                    <Route
                        path=path!("salary")
                        view=|| view! { <PinGate section="salary"><SalaryList /></PinGate> }
                    />
                    <Route path=path!("hiring") view=HiringBoard />
                    <Route
                        path=path!("evaluations")
                        view=|| view! { <PinGate section="evaluations"><EvaluationsPage /></PinGate> }
                    />
                    <Route path=path!("website/portfolio") view=PortfolioList />
                    <Route path=path!("website/positions") view=PositionsList />
                    <Route path=path!("website/culture") view=CultureList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
