//! HTML rendering for the employee listing page.

use entity::employees;

/// Renders the index page: the employee table with per-row delete links and
/// the add form.
pub fn index_page(employees: &[employees::Model]) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Employee Directory</title></head>\n\
         <body>\n\
         <h1>Employees</h1>\n",
    );

    if employees.is_empty() {
        html.push_str("<p>No employees yet.</p>\n");
    } else {
        html.push_str(
            "<table>\n\
             <tr><th>ID</th><th>Name</th><th>Department</th><th></th></tr>\n",
        );
        for employee in employees {
            html.push_str("<tr>");
            html.push_str(&format!("<td>{}</td>", employee.id));
            html.push_str(&format!("<td>{}</td>", escape_html(&employee.name)));
            html.push_str(&format!("<td>{}</td>", escape_html(&employee.department)));
            html.push_str(&format!(
                "<td><a href=\"/delete/{}\">Delete</a></td>",
                employee.id
            ));
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
    }

    html.push_str(
        "<h2>Add Employee</h2>\n\
         <form action=\"/add\" method=\"post\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\" required>\n\
         <input type=\"text\" name=\"department\" placeholder=\"Department\" required>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         </body>\n\
         </html>\n",
    );
    html
}

/// Minimal escaping for values interpolated into element content.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
