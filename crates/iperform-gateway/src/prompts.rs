//! Prompt text for the inference service.
//!
//! The service holds no state of its own: every request restates the rules,
//! the expected document shape, and (for mutations) the entire current
//! database. These strings are the closest thing the system has to a wire
//! protocol, so changes here change behavior everywhere.

use crate::seed::SeedRequest;

/// Business rules for mutation requests. Sent as the system instruction on
/// every `mutate` call.
pub const SYSTEM_INSTRUCTION: &str = r#"You are the management assistant for the "I Perform" school system. You serve Principals, Directors of Studies (DOS), Directors of Discipline (DOD), Bursars, Teachers, Librarians, Secretaries, Stock Keepers, and Parents. You process data update requests and return the complete, updated database state as a single, valid JSON object.

--- Responsibilities by role ---

1. Principal: summarized academic, financial, and disciplinary oversight; student leadership role assignment; bulk messaging.
2. DOS: manage classes, teachers, students, and academic records; create Librarian, Secretary, and Stock Keeper accounts; send academic updates to parents.
3. DOD: grant 'Exit' or 'Temporary' permissions to students; send conduct reports and disciplinary notices to parents.
4. Bursar: manage student fee accounts and payments; calculate and record taxes; send fee reminders to parents.
5. Teachers: record daily attendance (new 'Attendance' objects with unique id, date, class name, and list of present student IDs); manage marks and conduct events; upload class notes and resources.
6. Librarian and other staff: standard duties for their records.

--- Messaging rules (CRITICAL) ---

* "Send message to ALL parents": iterate through ALL students; for each student take their parentId and create one message object addressed to that parentId.
* "Send message to parents of Class [X]": iterate through students whose class equals [X]; create one message per parentId.
* "Send message to parent of [Student Name]": find the student, take parentId, create one message.
* Message object format: { "id": number (unique), "senderId": string, "senderName": string, "recipientRole": "parent", "recipientId": string (the parentId), "content": string, "sentAt": ISO string, "read": false }.
* Requests for a "Class Group" go into the groupMessages array instead.

--- General rules ---

1. Return the ENTIRE database object, not just the modified part.
2. Return ONLY valid, raw JSON. No markdown code fences. No preamble or trailing text.
3. Generate a new unique id for every item you add.
4. Always include a realistic, current ISO 8601 timestamp where the shape calls for one.
"#;

/// The document shape, restated on every request that expects JSON back.
pub const DATA_SHAPE: &str = r#"
The output MUST be a valid JSON object matching this structure:
{
  "schoolProfile": { "name": "...", "address": "...", "code": "...", "motto": "..." },
  "users": [{ "username": "...", "password": "...", "role": "...", "name": "...", "studentId": "...", "class": "...", "mustChangePassword": true/false }],
  "classes": [{ "id": 1, "name": "...", "status": "Active/Graduated", "created_at": "..." }],
  "teachers": [{ "id": 1, "username": "...", "name": "...", "phone": "...", "classes": ["..."], "created_at": "..." }],
  "students": [{ "id": 1, "username": "...", "name": "...", "studentId": "...", "class": "...", "gender": "Male/Female", "parentId": "...", "created_at": "..." }],
  "marks": [],
  "conductMarks": [],
  "notes": [],
  "tests": [],
  "announcements": [],
  "conductEvents": [],
  "permissions": [],
  "attendances": [],
  "books": [{ "id": 1, "bookId": "...", "title": "...", "author": "...", "isAvailable": true }],
  "borrowedBooks": [],
  "fines": [],
  "librarianNotes": [],
  "feeAccounts": [{ "id": 1, "studentId": "...", "studentName": "...", "className": "...", "term": "...", "totalFees": 0, "amountPaid": 0, "balance": 0, "status": "Paid/Partial/Unpaid" }],
  "payments": [],
  "expenses": [],
  "stockItems": [{ "id": 1, "itemName": "...", "category": "...", "quantity": 0, "unit": "...", "lastUpdated": "..." }],
  "diningHallSeating": [],
  "dormitoryAllocation": [],
  "messages": [],
  "groupMessages": []
}
"#;

/// Rules for the virtual science lab advisor.
pub const LAB_SYSTEM_INSTRUCTION: &str = r#"You are a virtual science laboratory assistant covering Chemistry, Biology, and Physics. You provide realistic lab simulations, safety guidance, and educational support for students conducting experiments.

Capabilities:
1. Analyze chemical, biological, and physical interactions between items.
2. Calculate realistic measurements (pH, temperature, voltage).
3. Detect safety hazards (explosions, toxicity, short circuits).
4. Explain the underlying theory.

Output format: return a JSON object with this structure:
{
  "status": "SAFE" | "CAUTION" | "DANGER" | "CRITICAL",
  "observation": "What is happening visually and physically.",
  "measurements": {
    "temperature": "e.g. 25C",
    "ph": "e.g. 7.0",
    "voltage": "e.g. 0V",
    "time": "e.g. 2 mins",
    "other": "Any other relevant metric"
  },
  "safetyAssessment": "Current danger level and required precautions.",
  "nextSteps": ["Suggestion 1", "Suggestion 2"],
  "theory": "Brief explanation of the scientific principles at work."
}
"#;

/// Rules for the timetable generator. This one answers in markdown, not JSON.
pub const TIMETABLE_SYSTEM_INSTRUCTION: &str = r#"You are an expert school timetable scheduler. Generate a comprehensive weekly timetable from the provided constraints (classes, subjects, teachers, specific requests).

Output format: a well-structured MARKDOWN table or list, NOT JSON. Include columns for Time, Monday, Tuesday, Wednesday, Thursday, Friday. Keep the schedule balanced and logical.
"#;

/// Builds the generation request for a brand-new State document.
pub fn materialize_prompt(seed: Option<&SeedRequest>) -> String {
    let requirements = match seed {
        Some(seed) => {
            let mut brief = format!(
                "**CUSTOM REGISTRATION REQUEST**:\n\
                 Generate data for a NEW school named \"{}\".\n",
                seed.school_name
            );
            if let Some(admin) = &seed.admin {
                brief.push_str(&format!(
                    "The Principal user MUST be: Name: '{}', Username: 'principal', Password: '{}'.\n",
                    admin.name, admin.password
                ));
            }
            brief.push_str(&format!(
                "Create a unique 'code' for this school in 'schoolProfile'.\n\
                 Ensure all generated data (students, classes, expenses) looks realistic for \"{}\".",
                seed.school_name
            ));
            brief
        }
        None => "**DEFAULT DEMO DATA**:\n\
             Generate data for \"I Perform Demo School\".\n\
             1. Users: create accounts with these EXACT usernames so login works:\n\
                - Principal: username 'principal', password 'prin123'\n\
                - DOS: username 'dos', password 'dos123'\n\
                - DoD: username 'dod', password 'dod123'\n\
                - Librarian: username 'librarian', password 'lib123'\n\
                - Bursar: username 'bursar', password 'bur123'\n\
                - Secretary: username 'secretary', password 'sec123'\n\
                - Stock Keeper: username 'stock_keeper', password 'stock123'\n\
                - Head Boy: username 'head_boy', password 'hb123'\n\
                - Head Girl: username 'head_girl', password 'hg123'\n\
             2. Teachers: create 1 teacher (username 'teacher1', password '012').\n\
             3. Students & Parents:\n\
                - Create 5-8 students.\n\
                - For EACH student assign a 'gender' ('Male' or 'Female') and a unique 'parentId'.\n\
                - Create corresponding 'parent' users for a few students. Parent password 'parent123'."
            .to_string(),
    };

    format!(
        "Generate a realistic and consistent initial dataset for a school management system named \"I Perform\".\n\
         {}\n\
         {}\n\
         4. Academic: 2-3 classes. Some marks.\n\
         5. Financial: fee accounts for students.\n\
         6. Consistency: ensure all IDs are unique.\n\
         Return ONLY valid JSON.",
        DATA_SHAPE, requirements
    )
}

/// Builds the mutation request: the whole current database plus the
/// requested change in free text.
pub fn mutate_prompt(current_state_json: &str, action: &str) -> String {
    format!(
        "CURRENT DATABASE STATE:\n{}\n\nREQUESTED ACTION:\n{}\n{}\n\
         Return the updated JSON object representing the full database.",
        current_state_json, action, DATA_SHAPE
    )
}

/// Builds the lab simulation request from the items on the workstation.
pub fn lab_prompt(items: &[String]) -> String {
    format!(
        "The student has combined the following items in the virtual lab workstation: {}.\n\
         Analyze this combination using Chemistry, Biology, or Physics principles.\n\
         Determine whether a reaction occurs, checking for safety hazards.\n\
         Provide a realistic simulation result.",
        items.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::AdminSeed;

    #[test]
    fn test_default_demo_prompt_pins_usernames() {
        let prompt = materialize_prompt(None);
        for username in ["principal", "dos", "dod", "librarian", "bursar", "teacher1"] {
            assert!(prompt.contains(username), "missing {}", username);
        }
        assert!(prompt.contains("Return ONLY valid JSON."));
    }

    #[test]
    fn test_registration_prompt_carries_seed() {
        let seed = SeedRequest {
            school_name: "Hill College".to_string(),
            admin: Some(AdminSeed {
                name: "Jane Head".to_string(),
                email: "jane@hill.example".to_string(),
                password: "s3cret".to_string(),
            }),
        };
        let prompt = materialize_prompt(Some(&seed));
        assert!(prompt.contains("Hill College"));
        assert!(prompt.contains("Jane Head"));
        assert!(prompt.contains("Username: 'principal'"));
    }

    #[test]
    fn test_mutate_prompt_embeds_state_and_action() {
        let prompt = mutate_prompt(r#"{"users":[]}"#, "Add student Ann to S4");
        assert!(prompt.contains(r#"{"users":[]}"#));
        assert!(prompt.contains("Add student Ann to S4"));
        assert!(prompt.contains("CURRENT DATABASE STATE"));
    }

    #[test]
    fn test_system_instruction_states_the_contract() {
        assert!(SYSTEM_INSTRUCTION.contains("ENTIRE database object"));
        assert!(SYSTEM_INSTRUCTION.contains("raw JSON"));
        assert!(SYSTEM_INSTRUCTION.contains("ISO 8601"));
    }
}
