//! Static records served when no provider or fresh cache has data.

use asha_core::{Event, JobListing, MentorshipProgram, MentorshipStatus, Salary};

fn inr(min: f64, max: f64) -> Option<Salary> {
    Some(Salary {
        min,
        max,
        currency: "INR".to_string(),
    })
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    work_arrangement: &str,
    job_type: &str,
    description: &str,
    requirements: &[&str],
    salary: Option<Salary>,
    posted_date: &str,
    application_url: Option<&str>,
) -> JobListing {
    JobListing {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        work_arrangement: work_arrangement.to_string(),
        job_type: job_type.to_string(),
        description: description.to_string(),
        requirements: strings(requirements),
        salary,
        posted_date: posted_date.to_string(),
        application_url: application_url.map(str::to_string),
    }
}

pub fn jobs() -> Vec<JobListing> {
    vec![
        job(
            "job-1",
            "Senior Full Stack Developer",
            "TechVision Inc.",
            "Bangalore (Hybrid)",
            "Remote",
            "Full-time",
            "Build and maintain scalable web applications with React, Node.js, and AWS. Flexible work hours and 3 days WFH per week.",
            &[
                "5+ years of experience with full stack development",
                "Proficiency in React, Node.js, and AWS",
                "Experience with CI/CD pipelines",
            ],
            inr(1_800_000.0, 2_500_000.0),
            "2023-07-15",
            None,
        ),
        job(
            "job-2",
            "Frontend Developer",
            "WomenInTech Solutions",
            "Any Location",
            "Remote",
            "Part-time",
            "Create responsive web interfaces using React and modern CSS. Fully remote with flexible hours, ideal for working parents.",
            &[
                "3+ years of experience with frontend development",
                "Proficiency in React, HTML5, CSS3",
                "Experience with UI/UX design principles",
            ],
            inr(1_200_000.0, 1_800_000.0),
            "2023-07-18",
            Some("https://womenintech.com/careers"),
        ),
        job(
            "job-3",
            "DevOps Engineer",
            "CloudNative Systems",
            "Mumbai",
            "Hybrid",
            "Full-time",
            "Implement and manage CI/CD pipelines, Kubernetes clusters, and cloud infrastructure on AWS and GCP. 2 days remote per week.",
            &[
                "4+ years of experience with DevOps",
                "Proficiency in Kubernetes, Docker, Terraform",
                "AWS or GCP certification preferred",
            ],
            inr(1_600_000.0, 2_200_000.0),
            "2023-07-10",
            None,
        ),
        job(
            "job-4",
            "Data Scientist",
            "Analytix Labs",
            "Pune",
            "Remote",
            "Full-time",
            "Develop and implement machine learning models to solve complex business problems. Fully remote position with flexible hours.",
            &[
                "3+ years of experience in data science",
                "Proficiency in Python, Pandas, Scikit-learn",
                "Experience with deep learning frameworks a plus",
            ],
            inr(1_500_000.0, 2_200_000.0),
            "2023-07-20",
            None,
        ),
        job(
            "job-5",
            "UX/UI Designer",
            "DesignFirst Creative",
            "Bangalore",
            "Hybrid",
            "Full-time",
            "Create intuitive user experiences and visually appealing interfaces for web and mobile applications. 3 days remote per week.",
            &[
                "4+ years of experience in UX/UI design",
                "Proficiency in Figma, Adobe XD",
                "Portfolio showcasing user-centered design process",
            ],
            inr(1_400_000.0, 2_000_000.0),
            "2023-07-12",
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn program(
    id: &str,
    title: &str,
    status: MentorshipStatus,
    start_date: &str,
    duration: &str,
    description: &str,
    learn_more_url: &str,
    apply_url: Option<&str>,
) -> MentorshipProgram {
    MentorshipProgram {
        id: id.to_string(),
        title: title.to_string(),
        status,
        start_date: start_date.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        learn_more_url: Some(learn_more_url.to_string()),
        apply_url: apply_url.map(str::to_string),
        speakers: None,
        tags: None,
        registration_url: None,
    }
}

pub fn mentorships() -> Vec<MentorshipProgram> {
    vec![
        program(
            "mentorship-1",
            "TechWomen Leadership Program",
            MentorshipStatus::ApplicationsOpen,
            "August 15, 2023",
            "3 months",
            "Connects emerging women leaders in tech with mentors from leading companies in Silicon Valley and the Bay Area.",
            "https://techwomen.org/leadership",
            Some("https://techwomen.org/leadership/apply"),
        ),
        program(
            "mentorship-2",
            "Women in Engineering Mentorship",
            MentorshipStatus::ComingSoon,
            "September 10, 2023",
            "6 months",
            "Pairs mid-career engineers with senior leaders to accelerate career growth and overcome gender-specific challenges.",
            "https://womeninengineering.org/mentorship",
            None,
        ),
        program(
            "mentorship-3",
            "Coding Sisters Program",
            MentorshipStatus::ApplicationsOpen,
            "August 1, 2023",
            "4 months",
            "Mentorship for women beginning their software development careers, with emphasis on practical coding skills and career navigation.",
            "https://codingsisters.org",
            Some("https://codingsisters.org/apply"),
        ),
        program(
            "mentorship-4",
            "Executive Leadership for Women in Tech",
            MentorshipStatus::ComingSoon,
            "October 5, 2023",
            "12 months",
            "High-level mentorship program designed for women aiming for C-suite positions in technology companies.",
            "https://executivewomenintech.org",
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    event_type: &str,
    date: &str,
    time: &str,
    location: &str,
    description: &str,
    register_url: &str,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        event_type: event_type.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        register_url: Some(register_url.to_string()),
        speakers: None,
        tags: None,
        registration_url: None,
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            "event-1",
            "Women in Data Science Conference",
            "Conference",
            "2023-08-25",
            "09:00-17:00",
            "Hyderabad International Convention Center",
            "Annual conference focusing on the latest trends in data science, with speakers from leading technology companies and research institutions.",
            "https://widsconference.org/register",
        ),
        event(
            "event-2",
            "Tech Resume Workshop",
            "Workshop",
            "2023-08-10",
            "14:00-16:00",
            "Online",
            "Learn how to craft an effective technical resume that highlights your skills and experiences. Includes resume review session.",
            "https://techresume.org/workshop",
        ),
        event(
            "event-3",
            "Leadership Skills for Women in Tech",
            "Seminar",
            "2023-09-05",
            "10:00-12:00",
            "Taj Bangalore",
            "Interactive seminar focused on developing leadership skills specific to navigating technology careers as a woman.",
            "https://womenleaders.tech/seminar",
        ),
        event(
            "event-4",
            "Negotiation Strategies Workshop",
            "Workshop",
            "2023-08-18",
            "15:00-17:00",
            "Online",
            "Practical workshop teaching effective negotiation strategies for job offers, promotions, and workplace opportunities.",
            "https://negotiationskills.org/workshop",
        ),
    ]
}
