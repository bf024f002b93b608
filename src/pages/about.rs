//! About page: searchable employee directory.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::state::filter::{matches, searchable_text};

struct Employee {
    name: &'static str,
    role: &'static str,
    qualification: &'static str,
    photo: &'static str,
}

const EMPLOYEES: &[Employee] = &[
    Employee {
        name: "Pieter Murn",
        role: "Founder & Master Joiner",
        qualification: "Trade-qualified cabinetmaker, 30 years at the bench",
        photo: "/assets/team/pieter-murn.jpg",
    },
    Employee {
        name: "Thandi Nkosi",
        role: "Workshop Manager",
        qualification: "BTech Production Management",
        photo: "/assets/team/thandi-nkosi.jpg",
    },
    Employee {
        name: "Riaan de Wet",
        role: "Joiner",
        qualification: "Red Seal carpentry and joinery",
        photo: "/assets/team/riaan-de-wet.jpg",
    },
    Employee {
        name: "Lerato Mokoena",
        role: "Finisher",
        qualification: "Certified in traditional oil and wax finishes",
        photo: "/assets/team/lerato-mokoena.jpg",
    },
    Employee {
        name: "Sarah Venter",
        role: "Client Liaison",
        qualification: "BA Communications",
        photo: "/assets/team/sarah-venter.jpg",
    },
];

fn employee_matches(employee: &Employee, query: &str) -> bool {
    let text = searchable_text(&[employee.name, employee.role, employee.qualification]);
    matches(&text, query)
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    let none_visible = move || {
        query.with(|q| !EMPLOYEES.iter().any(|e| employee_matches(e, q)))
    };

    let cards = EMPLOYEES
        .iter()
        .map(|employee| {
            let visible = move || query.with(|q| employee_matches(employee, q));
            view! {
                <div
                    class="employee"
                    style:display=move || if visible() { "" } else { "none" }
                >
                    <img src=employee.photo alt=employee.name loading="lazy"/>
                    <h3>{employee.name}</h3>
                    <p class="employee__role">{employee.role}</p>
                    <p class="employee__qualification">{employee.qualification}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="about-page">
            <h1>"About Us"</h1>
            <p>
                "Murn Interiors is a small Cape Town workshop making solid-wood "
                "furniture to order since 1998."
            </p>
            <h2>"Meet the team"</h2>
            <SearchBar id="employeeSearch" placeholder="Search the team..." query=query/>
            <div class="employee-grid">{cards}</div>
            <p
                id="employeeNoResult"
                class="no-result"
                style:display=move || if none_visible() { "block" } else { "none" }
            >
                "No team members match your search."
            </p>
        </section>
    }
}
