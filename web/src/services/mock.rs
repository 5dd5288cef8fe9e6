//! Seeded in-memory dataset used whenever no remote backend is configured.
//! Mutations apply to the shared store so the UI sees consistent counts for
//! the lifetime of the process.

use std::sync::RwLock;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use shared_types::{
    ApiResponse, Capsule, DatasetUpload, HeatmapCell, JobApplication, JobPosting, MentorProfile,
    MentorshipRequest, PlatformStats, RecruiterStats, Role, SkillNode, StoredUser, StudentStats,
    UploadStatus,
};

static STORE: Lazy<RwLock<MockStore>> = Lazy::new(|| RwLock::new(MockStore::seed()));

fn with_store<T>(f: impl FnOnce(&mut MockStore) -> ApiResponse<T>) -> ApiResponse<T> {
    match STORE.write() {
        Ok(mut store) => f(&mut store),
        Err(_) => ApiResponse::fail("Mock data store is unavailable"),
    }
}

fn timestamp(days_ago: i64) -> String {
    iso(Utc::now() - Duration::days(days_ago))
}

fn iso(moment: DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Secs, true)
}

struct PendingAccount {
    email: String,
}

struct TimedApplication {
    record: JobApplication,
    submitted: DateTime<Utc>,
}

struct TimedUpload {
    record: DatasetUpload,
    started: DateTime<Utc>,
}

struct MockStore {
    accounts: Vec<StoredUser>,
    pending_accounts: Vec<PendingAccount>,
    jobs: Vec<JobPosting>,
    applications: Vec<TimedApplication>,
    mentors: Vec<MentorProfile>,
    requests: Vec<MentorshipRequest>,
    capsules: Vec<Capsule>,
    uploads: Vec<TimedUpload>,
    next_id: i64,
}

/// Simulated ingestion timeline for a dataset upload, derived from wall-clock
/// elapsed seconds so repeated polls observe steady forward progress.
fn progress_at(elapsed_secs: i64) -> (UploadStatus, f32) {
    if elapsed_secs < 3 {
        return (UploadStatus::Queued, 0.0);
    }
    if elapsed_secs < 9 {
        let percent = (elapsed_secs - 3) as f32 / 6.0 * 15.0;
        return (UploadStatus::Validating, percent);
    }
    let percent = 15.0 + (elapsed_secs - 9) as f32 * 2.0;
    if percent >= 100.0 {
        (UploadStatus::Complete, 100.0)
    } else {
        (UploadStatus::Ingesting, percent)
    }
}

impl MockStore {
    fn seed() -> Self {
        let accounts = vec![
            StoredUser {
                id: 1,
                name: "Jordan Wells".to_string(),
                email: "student@alumnet.dev".to_string(),
                role: Role::Student,
                company: None,
            },
            StoredUser {
                id: 2,
                name: "Priya Raman".to_string(),
                email: "recruiter@alumnet.dev".to_string(),
                role: Role::Recruiter,
                company: Some("Northwind Labs".to_string()),
            },
            StoredUser {
                id: 3,
                name: "Sam Okafor".to_string(),
                email: "admin@alumnet.dev".to_string(),
                role: Role::Admin,
                company: None,
            },
        ];

        let jobs = vec![
            JobPosting {
                id: 101,
                title: "Backend Engineer".to_string(),
                company: "Northwind Labs".to_string(),
                location: "Chicago, IL".to_string(),
                category: "engineering".to_string(),
                remote: true,
                salary_range: Some("$120k - $150k".to_string()),
                description: "Own services on the ingestion path and help us retire a legacy queue."
                    .to_string(),
                posted_at: timestamp(2),
                applicant_count: 14,
                status: "open".to_string(),
            },
            JobPosting {
                id: 102,
                title: "Data Analyst".to_string(),
                company: "Harbor Health".to_string(),
                location: "Boston, MA".to_string(),
                category: "data".to_string(),
                remote: false,
                salary_range: Some("$85k - $105k".to_string()),
                description: "Partner with clinical ops to turn messy spreadsheets into dashboards."
                    .to_string(),
                posted_at: timestamp(5),
                applicant_count: 32,
                status: "open".to_string(),
            },
            JobPosting {
                id: 103,
                title: "Product Designer".to_string(),
                company: "Fernway".to_string(),
                location: "Remote".to_string(),
                category: "design".to_string(),
                remote: true,
                salary_range: None,
                description: "First design hire for a seed-stage climate startup.".to_string(),
                posted_at: timestamp(1),
                applicant_count: 8,
                status: "open".to_string(),
            },
            JobPosting {
                id: 104,
                title: "Machine Learning Intern".to_string(),
                company: "Northwind Labs".to_string(),
                location: "Chicago, IL".to_string(),
                category: "data".to_string(),
                remote: false,
                salary_range: Some("$40/hr".to_string()),
                description: "Summer internship on the recommendations team.".to_string(),
                posted_at: timestamp(9),
                applicant_count: 51,
                status: "open".to_string(),
            },
            JobPosting {
                id: 105,
                title: "Engineering Manager".to_string(),
                company: "Harbor Health".to_string(),
                location: "Boston, MA".to_string(),
                category: "engineering".to_string(),
                remote: false,
                salary_range: Some("$170k - $195k".to_string()),
                description: "Lead a team of six across two product surfaces.".to_string(),
                posted_at: timestamp(14),
                applicant_count: 22,
                status: "closed".to_string(),
            },
            JobPosting {
                id: 106,
                title: "Developer Advocate".to_string(),
                company: "Quillstack".to_string(),
                location: "New York, NY".to_string(),
                category: "product".to_string(),
                remote: true,
                salary_range: Some("$110k - $130k".to_string()),
                description: "Write, speak and prototype with our SDK community.".to_string(),
                posted_at: timestamp(3),
                applicant_count: 19,
                status: "open".to_string(),
            },
        ];

        let applications = vec![TimedApplication {
            record: JobApplication {
                id: 501,
                job_id: 102,
                applicant_name: "Jordan Wells".to_string(),
                status: "submitted".to_string(),
                submitted_at: timestamp(4),
            },
            submitted: Utc::now() - Duration::days(4),
        }];

        let mentors = vec![
            MentorProfile {
                id: 201,
                name: "Elena Vasquez".to_string(),
                class_year: 2011,
                industry: "Software".to_string(),
                skills: vec![
                    "distributed systems".to_string(),
                    "career planning".to_string(),
                    "rust".to_string(),
                ],
                rating: 4.9,
                mentee_count: 7,
                accepting: true,
                headline: "Staff engineer who loves first-job questions".to_string(),
            },
            MentorProfile {
                id: 202,
                name: "Marcus Cole".to_string(),
                class_year: 2008,
                industry: "Finance".to_string(),
                skills: vec!["valuation".to_string(), "interview prep".to_string()],
                rating: 4.4,
                mentee_count: 12,
                accepting: true,
                headline: "VP at a mid-market fund, happy to review case decks".to_string(),
            },
            MentorProfile {
                id: 203,
                name: "Aiko Tanaka".to_string(),
                class_year: 2015,
                industry: "Design".to_string(),
                skills: vec!["portfolio reviews".to_string(), "ux research".to_string()],
                rating: 4.7,
                mentee_count: 4,
                accepting: false,
                headline: "Design lead, back after parental leave in the fall".to_string(),
            },
            MentorProfile {
                id: 204,
                name: "Dev Mehta".to_string(),
                class_year: 2013,
                industry: "Data".to_string(),
                skills: vec![
                    "analytics".to_string(),
                    "sql".to_string(),
                    "storytelling".to_string(),
                ],
                rating: 4.1,
                mentee_count: 9,
                accepting: true,
                headline: "Analytics manager, ex-consultant".to_string(),
            },
            MentorProfile {
                id: 205,
                name: "Grace Lindqvist".to_string(),
                class_year: 2005,
                industry: "Product".to_string(),
                skills: vec!["roadmaps".to_string(), "stakeholder management".to_string()],
                rating: 4.8,
                mentee_count: 15,
                accepting: true,
                headline: "CPO at a healthtech scale-up".to_string(),
            },
        ];

        let requests = vec![
            MentorshipRequest {
                id: 301,
                mentor_id: 202,
                mentor_name: "Marcus Cole".to_string(),
                student_name: "Jordan Wells".to_string(),
                focus: "Breaking into fintech".to_string(),
                status: "accepted".to_string(),
                created_at: timestamp(21),
            },
            MentorshipRequest {
                id: 302,
                mentor_id: 204,
                mentor_name: "Dev Mehta".to_string(),
                student_name: "Jordan Wells".to_string(),
                focus: "SQL interview practice".to_string(),
                status: "declined".to_string(),
                created_at: timestamp(10),
            },
        ];

        let capsules = vec![
            Capsule {
                id: 401,
                author: "Elena Vasquez".to_string(),
                title: "How I prep for system design interviews".to_string(),
                body: "Start from the data model, not the boxes. Interviewers remember \
                       candidates who name their trade-offs out loud."
                    .to_string(),
                topic: "careers".to_string(),
                like_count: 48,
                bookmark_count: 21,
                created_at: timestamp(6),
                status: "published".to_string(),
            },
            Capsule {
                id: 402,
                author: "Marcus Cole".to_string(),
                title: "Reading a 10-K in twenty minutes".to_string(),
                body: "Skip to the MD&A, then the footnotes on revenue recognition. \
                       Everything else is marketing."
                    .to_string(),
                topic: "finance".to_string(),
                like_count: 31,
                bookmark_count: 17,
                created_at: timestamp(12),
                status: "published".to_string(),
            },
            Capsule {
                id: 403,
                author: "Jordan Wells".to_string(),
                title: "Notes from the spring career fair".to_string(),
                body: "Which booths actually collected resumes, and which sent you to a QR code \
                       that 404'd."
                    .to_string(),
                topic: "campus".to_string(),
                like_count: 12,
                bookmark_count: 3,
                created_at: timestamp(2),
                status: "published".to_string(),
            },
            Capsule {
                id: 404,
                author: "Grace Lindqvist".to_string(),
                title: "Your first 90 days as a PM".to_string(),
                body: "Ship something tiny in week two. Credibility compounds faster than \
                       strategy documents."
                    .to_string(),
                topic: "careers".to_string(),
                like_count: 57,
                bookmark_count: 34,
                created_at: timestamp(8),
                status: "published".to_string(),
            },
            Capsule {
                id: 405,
                author: "Aiko Tanaka".to_string(),
                title: "Portfolio mistakes I see every season".to_string(),
                body: "Case studies with no failure section read as fiction.".to_string(),
                topic: "design".to_string(),
                like_count: 26,
                bookmark_count: 11,
                created_at: timestamp(4),
                status: "published".to_string(),
            },
            Capsule {
                id: 406,
                author: "Dev Mehta".to_string(),
                title: "Untitled draft on dbt pipelines".to_string(),
                body: "Rough notes, needs a second pass before it goes out.".to_string(),
                topic: "data".to_string(),
                like_count: 0,
                bookmark_count: 0,
                created_at: timestamp(1),
                status: "pending".to_string(),
            },
            Capsule {
                id: 407,
                author: "Riley Chen".to_string(),
                title: "Selling class notes, DM me".to_string(),
                body: "Full semester of notes for three courses, payment up front.".to_string(),
                topic: "campus".to_string(),
                like_count: 0,
                bookmark_count: 0,
                created_at: timestamp(0),
                status: "pending".to_string(),
            },
        ];

        let uploads = vec![
            TimedUpload {
                record: DatasetUpload {
                    id: 601,
                    file_name: "alumni_2024_graduates.csv".to_string(),
                    uploaded_by: "Sam Okafor".to_string(),
                    record_count: 1842,
                    status: UploadStatus::Complete,
                    progress_percent: 100.0,
                    failure_reason: None,
                    started_at: timestamp(3),
                },
                started: Utc::now() - Duration::days(3),
            },
            TimedUpload {
                record: DatasetUpload {
                    id: 602,
                    file_name: "employer_directory.json".to_string(),
                    uploaded_by: "Sam Okafor".to_string(),
                    record_count: 503,
                    status: UploadStatus::Failed,
                    progress_percent: 38.0,
                    failure_reason: Some("Row 214: unknown industry code 'XR'".to_string()),
                    started_at: timestamp(1),
                },
                started: Utc::now() - Duration::days(1),
            },
            TimedUpload {
                record: DatasetUpload {
                    id: 603,
                    file_name: "mentorship_signups_spring.csv".to_string(),
                    uploaded_by: "Sam Okafor".to_string(),
                    record_count: 967,
                    status: UploadStatus::Ingesting,
                    progress_percent: 20.0,
                    failure_reason: None,
                    started_at: iso(Utc::now() - Duration::seconds(15)),
                },
                started: Utc::now() - Duration::seconds(15),
            },
        ];

        Self {
            accounts,
            pending_accounts: Vec::new(),
            jobs,
            applications,
            mentors,
            requests,
            capsules,
            uploads,
            next_id: 1000,
        }
    }

    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn login(&self, email: &str, password: &str) -> ApiResponse<StoredUser> {
        if password.trim().is_empty() {
            return ApiResponse::fail("Password is required");
        }
        match self
            .accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email.trim()))
        {
            Some(account) => ApiResponse::ok(account.clone()),
            None => ApiResponse::fail("No account found for that email address"),
        }
    }

    fn signup(&mut self, name: &str, email: &str, password: &str) -> ApiResponse<String> {
        let email = email.trim();
        if name.trim().is_empty() {
            return ApiResponse::fail("Name is required");
        }
        if !email.contains('@') {
            return ApiResponse::fail("Enter a valid email address");
        }
        if password.trim().len() < 8 {
            return ApiResponse::fail("Password must be at least 8 characters");
        }
        let taken = self
            .accounts
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(email))
            || self
                .pending_accounts
                .iter()
                .any(|pending| pending.email.eq_ignore_ascii_case(email));
        if taken {
            return ApiResponse::fail("An account with that email already exists");
        }
        self.pending_accounts.push(PendingAccount {
            email: email.to_string(),
        });
        ApiResponse::ok(email.to_string())
    }

    fn list_jobs(&self) -> ApiResponse<Vec<JobPosting>> {
        ApiResponse::ok(
            self.jobs
                .iter()
                .filter(|job| job.status == "open")
                .cloned()
                .collect(),
        )
    }

    fn recruiter_postings(&self, company: &str) -> ApiResponse<Vec<JobPosting>> {
        ApiResponse::ok(
            self.jobs
                .iter()
                .filter(|job| job.company.eq_ignore_ascii_case(company))
                .cloned()
                .collect(),
        )
    }

    fn apply_to_job(&mut self, job_id: i64, applicant_name: &str) -> ApiResponse<JobApplication> {
        let already = self.applications.iter().any(|application| {
            application.record.job_id == job_id && application.record.applicant_name == applicant_name
        });
        if already {
            return ApiResponse::fail("You have already applied to this role");
        }
        let id = self.alloc_id();
        let Some(job) = self.jobs.iter_mut().find(|job| job.id == job_id) else {
            return ApiResponse::fail("Job posting not found");
        };
        if job.status != "open" {
            return ApiResponse::fail("This posting is no longer accepting applications");
        }
        job.applicant_count += 1;
        let record = JobApplication {
            id,
            job_id,
            applicant_name: applicant_name.to_string(),
            status: "submitted".to_string(),
            submitted_at: iso(Utc::now()),
        };
        self.applications.push(TimedApplication {
            record: record.clone(),
            submitted: Utc::now(),
        });
        ApiResponse::ok(record)
    }

    fn recommended_jobs(&self, limit: usize) -> ApiResponse<Vec<JobPosting>> {
        let mut open: Vec<JobPosting> = self
            .jobs
            .iter()
            .filter(|job| job.status == "open")
            .cloned()
            .collect();
        open.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        open.truncate(limit);
        ApiResponse::ok(open)
    }

    fn recruiter_stats(&self, company: &str) -> ApiResponse<RecruiterStats> {
        let postings: Vec<&JobPosting> = self
            .jobs
            .iter()
            .filter(|job| job.company.eq_ignore_ascii_case(company))
            .collect();
        let posting_ids: Vec<i64> = postings.iter().map(|job| job.id).collect();
        let week_ago = Utc::now() - Duration::days(7);
        ApiResponse::ok(RecruiterStats {
            open_postings: postings.iter().filter(|job| job.status == "open").count() as i64,
            total_applicants: postings.iter().map(|job| job.applicant_count).sum(),
            new_this_week: self
                .applications
                .iter()
                .filter(|application| {
                    posting_ids.contains(&application.record.job_id)
                        && application.submitted > week_ago
                })
                .count() as i64,
            profile_views: 418,
        })
    }

    fn list_mentors(&self) -> ApiResponse<Vec<MentorProfile>> {
        ApiResponse::ok(self.mentors.clone())
    }

    fn request_mentorship(
        &mut self,
        mentor_id: i64,
        student_name: &str,
        focus: &str,
    ) -> ApiResponse<MentorshipRequest> {
        let Some(mentor) = self.mentors.iter().find(|mentor| mentor.id == mentor_id) else {
            return ApiResponse::fail("Mentor not found");
        };
        if !mentor.accepting {
            return ApiResponse::fail("This mentor is not accepting new mentees right now");
        }
        let duplicate = self.requests.iter().any(|request| {
            request.mentor_id == mentor_id
                && request.student_name == student_name
                && request.status == "pending"
        });
        if duplicate {
            return ApiResponse::fail("You already have a pending request with this mentor");
        }
        let mentor_name = mentor.name.clone();
        let id = self.alloc_id();
        let request = MentorshipRequest {
            id,
            mentor_id,
            mentor_name,
            student_name: student_name.to_string(),
            focus: focus.to_string(),
            status: "pending".to_string(),
            created_at: iso(Utc::now()),
        };
        self.requests.push(request.clone());
        ApiResponse::ok(request)
    }

    fn my_mentorship_requests(&self, student_name: &str) -> ApiResponse<Vec<MentorshipRequest>> {
        ApiResponse::ok(
            self.requests
                .iter()
                .filter(|request| request.student_name == student_name)
                .cloned()
                .collect(),
        )
    }

    fn list_capsules(&self) -> ApiResponse<Vec<Capsule>> {
        ApiResponse::ok(
            self.capsules
                .iter()
                .filter(|capsule| capsule.status == "published")
                .cloned()
                .collect(),
        )
    }

    fn capsules_by_ids(&self, ids: &[i64]) -> ApiResponse<Vec<Capsule>> {
        ApiResponse::ok(
            self.capsules
                .iter()
                .filter(|capsule| ids.contains(&capsule.id) && capsule.status == "published")
                .cloned()
                .collect(),
        )
    }

    fn create_capsule(
        &mut self,
        author: &str,
        title: &str,
        topic: &str,
        body: &str,
    ) -> ApiResponse<Capsule> {
        if title.trim().is_empty() || body.trim().is_empty() {
            return ApiResponse::fail("A capsule needs both a title and a body");
        }
        let id = self.alloc_id();
        let capsule = Capsule {
            id,
            author: author.to_string(),
            title: title.trim().to_string(),
            body: body.trim().to_string(),
            topic: if topic.trim().is_empty() {
                "general".to_string()
            } else {
                topic.trim().to_string()
            },
            like_count: 0,
            bookmark_count: 0,
            created_at: iso(Utc::now()),
            status: "pending".to_string(),
        };
        self.capsules.push(capsule.clone());
        ApiResponse::ok(capsule)
    }

    fn set_capsule_like(&mut self, capsule_id: i64, set: bool) -> ApiResponse<bool> {
        let Some(capsule) = self
            .capsules
            .iter_mut()
            .find(|capsule| capsule.id == capsule_id)
        else {
            return ApiResponse::fail("Capsule not found");
        };
        capsule.like_count = (capsule.like_count + if set { 1 } else { -1 }).max(0);
        ApiResponse::ok(set)
    }

    fn set_capsule_bookmark(&mut self, capsule_id: i64, set: bool) -> ApiResponse<bool> {
        let Some(capsule) = self
            .capsules
            .iter_mut()
            .find(|capsule| capsule.id == capsule_id)
        else {
            return ApiResponse::fail("Capsule not found");
        };
        capsule.bookmark_count = (capsule.bookmark_count + if set { 1 } else { -1 }).max(0);
        ApiResponse::ok(set)
    }

    fn pending_capsules(&self) -> ApiResponse<Vec<Capsule>> {
        ApiResponse::ok(
            self.capsules
                .iter()
                .filter(|capsule| capsule.status == "pending")
                .cloned()
                .collect(),
        )
    }

    fn moderate_capsule(&mut self, capsule_id: i64, approve: bool) -> ApiResponse<bool> {
        let Some(capsule) = self
            .capsules
            .iter_mut()
            .find(|capsule| capsule.id == capsule_id)
        else {
            return ApiResponse::fail("Capsule not found");
        };
        if capsule.status != "pending" {
            return ApiResponse::fail("This capsule has already been reviewed");
        }
        capsule.status = if approve { "published" } else { "rejected" }.to_string();
        ApiResponse::ok(approve)
    }

    fn platform_stats(&self) -> ApiResponse<PlatformStats> {
        ApiResponse::ok(PlatformStats {
            total_members: 2847,
            active_jobs: self.jobs.iter().filter(|job| job.status == "open").count() as i64,
            open_mentorships: self
                .requests
                .iter()
                .filter(|request| request.status == "accepted")
                .count() as i64,
            capsules_published: self
                .capsules
                .iter()
                .filter(|capsule| capsule.status == "published")
                .count() as i64,
            pending_moderation: self
                .capsules
                .iter()
                .filter(|capsule| capsule.status == "pending")
                .count() as i64,
            active_uploads: self
                .uploads
                .iter()
                .filter(|upload| upload.record.status.is_active())
                .count() as i64,
        })
    }

    fn student_stats(&self, student_name: &str) -> ApiResponse<StudentStats> {
        let applications = self
            .applications
            .iter()
            .filter(|application| application.record.applicant_name == student_name)
            .count() as i64;
        let mentorship_status = if self
            .requests
            .iter()
            .any(|r| r.student_name == student_name && r.status == "accepted")
        {
            "Active"
        } else if self
            .requests
            .iter()
            .any(|r| r.student_name == student_name && r.status == "pending")
        {
            "Request pending"
        } else {
            "Not started"
        };
        let completeness = (55 + applications.min(3) as i32 * 10
            + if mentorship_status == "Active" { 15 } else { 0 })
        .min(100);
        ApiResponse::ok(StudentStats {
            applications_submitted: applications,
            mentorship_status: mentorship_status.to_string(),
            profile_completeness: completeness,
        })
    }

    fn refresh_uploads(&mut self) {
        let now = Utc::now();
        for upload in &mut self.uploads {
            if !upload.record.status.is_active() {
                continue;
            }
            let elapsed = (now - upload.started).num_seconds();
            let (status, percent) = progress_at(elapsed);
            upload.record.status = status;
            upload.record.progress_percent = percent;
        }
    }

    fn list_uploads(&mut self) -> ApiResponse<Vec<DatasetUpload>> {
        self.refresh_uploads();
        let mut records: Vec<DatasetUpload> = self
            .uploads
            .iter()
            .map(|upload| upload.record.clone())
            .collect();
        records.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        ApiResponse::ok(records)
    }

    fn start_upload(&mut self, file_name: &str, uploaded_by: &str) -> ApiResponse<DatasetUpload> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return ApiResponse::fail("Choose a file to upload");
        }
        if !file_name.ends_with(".csv") && !file_name.ends_with(".json") {
            return ApiResponse::fail("Only CSV or JSON datasets are supported");
        }
        let id = self.alloc_id();
        let record = DatasetUpload {
            id,
            file_name: file_name.to_string(),
            uploaded_by: uploaded_by.to_string(),
            record_count: file_name.len() as i64 * 37 + 240,
            status: UploadStatus::Queued,
            progress_percent: 0.0,
            failure_reason: None,
            started_at: iso(Utc::now()),
        };
        self.uploads.push(TimedUpload {
            record: record.clone(),
            started: Utc::now(),
        });
        ApiResponse::ok(record)
    }

    fn skill_graph(&self) -> ApiResponse<Vec<SkillNode>> {
        ApiResponse::ok(vec![
            SkillNode {
                skill: "SQL".to_string(),
                weight: 86,
                related: vec!["analytics".to_string(), "dbt".to_string()],
            },
            SkillNode {
                skill: "Rust".to_string(),
                weight: 41,
                related: vec!["systems".to_string(), "wasm".to_string()],
            },
            SkillNode {
                skill: "Product sense".to_string(),
                weight: 63,
                related: vec!["roadmaps".to_string(), "user research".to_string()],
            },
            SkillNode {
                skill: "Financial modeling".to_string(),
                weight: 37,
                related: vec!["valuation".to_string(), "excel".to_string()],
            },
        ])
    }

    fn talent_heatmap(&self) -> ApiResponse<Vec<HeatmapCell>> {
        ApiResponse::ok(vec![
            HeatmapCell {
                region: "Chicago".to_string(),
                candidates: 412,
                intensity: 0.9,
            },
            HeatmapCell {
                region: "Boston".to_string(),
                candidates: 287,
                intensity: 0.7,
            },
            HeatmapCell {
                region: "New York".to_string(),
                candidates: 351,
                intensity: 0.8,
            },
            HeatmapCell {
                region: "Remote".to_string(),
                candidates: 198,
                intensity: 0.5,
            },
            HeatmapCell {
                region: "Bay Area".to_string(),
                candidates: 143,
                intensity: 0.4,
            },
        ])
    }
}

pub fn login(email: &str, password: &str) -> ApiResponse<StoredUser> {
    with_store(|store| store.login(email, password))
}

pub fn signup(name: &str, email: &str, password: &str) -> ApiResponse<String> {
    with_store(|store| store.signup(name, email, password))
}

pub fn list_jobs() -> ApiResponse<Vec<JobPosting>> {
    with_store(|store| store.list_jobs())
}

pub fn recruiter_postings(company: &str) -> ApiResponse<Vec<JobPosting>> {
    with_store(|store| store.recruiter_postings(company))
}

pub fn apply_to_job(job_id: i64, applicant_name: &str) -> ApiResponse<JobApplication> {
    with_store(|store| store.apply_to_job(job_id, applicant_name))
}

pub fn recommended_jobs(limit: usize) -> ApiResponse<Vec<JobPosting>> {
    with_store(|store| store.recommended_jobs(limit))
}

pub fn recruiter_stats(company: &str) -> ApiResponse<RecruiterStats> {
    with_store(|store| store.recruiter_stats(company))
}

pub fn list_mentors() -> ApiResponse<Vec<MentorProfile>> {
    with_store(|store| store.list_mentors())
}

pub fn request_mentorship(
    mentor_id: i64,
    student_name: &str,
    focus: &str,
) -> ApiResponse<MentorshipRequest> {
    with_store(|store| store.request_mentorship(mentor_id, student_name, focus))
}

pub fn my_mentorship_requests(student_name: &str) -> ApiResponse<Vec<MentorshipRequest>> {
    with_store(|store| store.my_mentorship_requests(student_name))
}

pub fn list_capsules() -> ApiResponse<Vec<Capsule>> {
    with_store(|store| store.list_capsules())
}

pub fn capsules_by_ids(ids: &[i64]) -> ApiResponse<Vec<Capsule>> {
    with_store(|store| store.capsules_by_ids(ids))
}

pub fn create_capsule(author: &str, title: &str, topic: &str, body: &str) -> ApiResponse<Capsule> {
    with_store(|store| store.create_capsule(author, title, topic, body))
}

pub fn set_capsule_like(capsule_id: i64, set: bool) -> ApiResponse<bool> {
    with_store(|store| store.set_capsule_like(capsule_id, set))
}

pub fn set_capsule_bookmark(capsule_id: i64, set: bool) -> ApiResponse<bool> {
    with_store(|store| store.set_capsule_bookmark(capsule_id, set))
}

pub fn pending_capsules() -> ApiResponse<Vec<Capsule>> {
    with_store(|store| store.pending_capsules())
}

pub fn moderate_capsule(capsule_id: i64, approve: bool) -> ApiResponse<bool> {
    with_store(|store| store.moderate_capsule(capsule_id, approve))
}

pub fn platform_stats() -> ApiResponse<PlatformStats> {
    with_store(|store| store.platform_stats())
}

pub fn student_stats(student_name: &str) -> ApiResponse<StudentStats> {
    with_store(|store| store.student_stats(student_name))
}

pub fn list_uploads() -> ApiResponse<Vec<DatasetUpload>> {
    with_store(|store| store.list_uploads())
}

pub fn start_upload(file_name: &str, uploaded_by: &str) -> ApiResponse<DatasetUpload> {
    with_store(|store| store.start_upload(file_name, uploaded_by))
}

pub fn skill_graph() -> ApiResponse<Vec<SkillNode>> {
    with_store(|store| store.skill_graph())
}

pub fn talent_heatmap() -> ApiResponse<Vec<HeatmapCell>> {
    with_store(|store| store.talent_heatmap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_progress_moves_through_the_pipeline() {
        assert_eq!(progress_at(0), (UploadStatus::Queued, 0.0));

        let (status, percent) = progress_at(5);
        assert_eq!(status, UploadStatus::Validating);
        assert!(percent > 0.0 && percent < 15.0);

        let (status, percent) = progress_at(30);
        assert_eq!(status, UploadStatus::Ingesting);
        assert!(percent > 15.0 && percent < 100.0);

        assert_eq!(progress_at(600), (UploadStatus::Complete, 100.0));
    }

    #[test]
    fn applying_twice_is_rejected_and_count_moves_once() {
        let mut store = MockStore::seed();
        let before = store
            .jobs
            .iter()
            .find(|job| job.id == 101)
            .map(|job| job.applicant_count)
            .expect("seeded job");

        let first = store.apply_to_job(101, "Casey Poe");
        assert!(first.success);
        let second = store.apply_to_job(101, "Casey Poe");
        assert!(!second.success);

        let after = store
            .jobs
            .iter()
            .find(|job| job.id == 101)
            .map(|job| job.applicant_count)
            .expect("seeded job");
        assert_eq!(after, before + 1);
    }

    #[test]
    fn closed_postings_reject_applications() {
        let mut store = MockStore::seed();
        let response = store.apply_to_job(105, "Casey Poe");
        assert!(!response.success);
    }

    #[test]
    fn moderation_is_one_shot() {
        let mut store = MockStore::seed();
        assert!(store.moderate_capsule(406, true).success);
        let again = store.moderate_capsule(406, false);
        assert!(!again.success);

        let published = store.list_capsules();
        assert!(published
            .data
            .expect("payload")
            .iter()
            .any(|capsule| capsule.id == 406));
    }

    #[test]
    fn like_count_never_goes_negative() {
        let mut store = MockStore::seed();
        assert!(store.set_capsule_like(403, false).success);
        let mut remaining = 12;
        while remaining > 0 {
            store.set_capsule_like(403, false);
            remaining -= 1;
        }
        let capsule = store
            .capsules
            .iter()
            .find(|capsule| capsule.id == 403)
            .expect("seeded capsule");
        assert_eq!(capsule.like_count, 0);
    }

    #[test]
    fn mentorship_requests_enforce_accepting_and_uniqueness() {
        let mut store = MockStore::seed();
        let closed = store.request_mentorship(203, "Casey Poe", "portfolio");
        assert!(!closed.success);

        let first = store.request_mentorship(201, "Casey Poe", "rust careers");
        assert!(first.success);
        let duplicate = store.request_mentorship(201, "Casey Poe", "rust careers again");
        assert!(!duplicate.success);
    }

    #[test]
    fn start_upload_validates_the_file_extension() {
        let mut store = MockStore::seed();
        assert!(!store.start_upload("notes.txt", "Sam Okafor").success);
        let ok = store.start_upload("alumni_fall.csv", "Sam Okafor");
        assert!(ok.success);
        let upload = ok.data.expect("payload");
        assert_eq!(upload.status, UploadStatus::Queued);
        assert_eq!(upload.progress_percent, 0.0);
    }

    #[test]
    fn signup_rejects_duplicate_emails() {
        let mut store = MockStore::seed();
        let duplicate = store.signup("Someone Else", "student@alumnet.dev", "longenough");
        assert!(!duplicate.success);
        let fresh = store.signup("New Grad", "new@alumnet.dev", "longenough");
        assert!(fresh.success);
        assert_eq!(fresh.data.as_deref(), Some("new@alumnet.dev"));
    }
}
