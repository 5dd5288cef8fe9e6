use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::ConfigProvider;

use crate::components::notifications::provide_notices;
use crate::components::{Navbar, NoticeStack};
use crate::utils::storage::provide_session;
use crate::views::admin::dashboard::AdminDashboard;
use crate::views::admin::moderation::AdminModeration;
use crate::views::admin::uploads::AdminUploads;
use crate::views::auth::{LoginPage, SignupPage};
use crate::views::home::HomePage;
use crate::views::jobs::JobBoard;
use crate::views::knowledge::KnowledgeFeed;
use crate::views::mentorship::MentorshipPage;
use crate::views::not_found::NotFound;
use crate::views::recruiter_dashboard::RecruiterDashboard;
use crate::views::saved::SavedCapsules;
use crate::views::student_dashboard::StudentDashboard;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session();
    provide_notices();

    view! {
        <Stylesheet id="leptos" href="/pkg/alumnet.css"/>

        <Title text="Alumnet"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <NoticeStack/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/signup") view=SignupPage/>
                        <Route path=path!("/jobs") view=JobBoard/>
                        <Route path=path!("/mentorship") view=MentorshipPage/>
                        <Route path=path!("/knowledge") view=KnowledgeFeed/>
                        <Route path=path!("/saved") view=SavedCapsules/>
                        <Route path=path!("/student/dashboard") view=StudentDashboard/>
                        <Route path=path!("/recruiter/dashboard") view=RecruiterDashboard/>
                        <Route path=path!("/admin/dashboard") view=AdminDashboard/>
                        <Route path=path!("/admin/uploads") view=AdminUploads/>
                        <Route path=path!("/admin/moderation") view=AdminModeration/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
