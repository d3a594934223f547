use crate::model::User;

/// Format users as plain text, one per line
pub fn format_output(users: &[User]) -> String {
    let mut output = String::new();
    for user in users {
        output.push_str(&format_user(user));
        output.push('\n');
    }
    output
}

fn format_user(user: &User) -> String {
    let privileges: Vec<&str> = user.privileges().iter().map(|p| p.as_str()).collect();
    format!("{} [{}]", user, privileges.join(", "))
}
