// Code generated by tempera@test DO NOT EDIT.

pub mod page {
    #![allow(non_snake_case, unused_imports, unused_mut, unused_variables, clippy::all)]

    use ::tempera_canvas as tempera;
    use ::tempera_canvas::RenderScope;
    use ::std::io;
    use ::tempera_canvas::StringWriter;
    use ::tempera_canvas::CssBuilder;
    use crate::Item;

    pub fn highlight(color: String) -> tempera::ComponentCssClass {
        let mut css = CssBuilder::new();
        css.push_str("font-weight:bold;");
        css.push_css(tempera::sanitize_css("color", color));
        css.finish("highlight")
    }

    pub fn greet(name: String) -> tempera::ComponentScript {
        tempera::ComponentScript {
            name: "__templ_greet_0113".into(),
            function: r#"function __templ_greet_0113(name){alert("Hello, " + name);}"#.into(),
            call: tempera::safe_script("__templ_greet_0113", &[tempera::script_arg(&name)]),
        }
    }

    pub fn item_row(item: Item) -> impl tempera::Component {
        tempera::component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            scope.rendered_css_classes();
            scope.rendered_scripts();
            let var_1 = tempera::CssClasses::from((highlight(item.color.clone())).clone());
            tempera::render_css(scope, w, &var_1)?;
            let var_2: tempera::ComponentScript = (greet(item.name.clone())).clone();
            tempera::render_scripts(scope, w, &[&var_2])?;
            w.write_str("<li")?;
            w.write_str(r#" class=""#)?;
            w.write_str(&tempera::escape_string(&var_1))?;
            w.write_str(r#"""#)?;
            w.write_str(r#" onclick=""#)?;
            w.write_str(&var_2.call)?;
            w.write_str(r#"""#)?;
            w.write_str(">")?;
            w.write_str(&tempera::escape_string(&(item.name)))?;
            w.write_str("</li>")?;
            Ok(())
        })
    }

    pub fn badge(style: tempera::ComponentCssClass, action: tempera::ComponentScript, link: String) -> impl tempera::Component {
        tempera::component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            scope.rendered_css_classes();
            scope.rendered_scripts();
            let var_3 = tempera::CssClasses::from((style).clone());
            tempera::render_css(scope, w, &var_3)?;
            let var_4: tempera::ComponentScript = (action).clone();
            tempera::render_scripts(scope, w, &[&var_4])?;
            w.write_str("<a")?;
            w.write_str(r#" class=""#)?;
            w.write_str(&tempera::escape_string(&var_3))?;
            w.write_str(r#"""#)?;
            w.write_str(r#" onclick=""#)?;
            w.write_str(&var_4.call)?;
            w.write_str(r#"""#)?;
            w.write_str(r#" href=""#)?;
            let var_5 = tempera::SafeUrl::from((link).clone());
            w.write_str(&tempera::escape_string(&var_5))?;
            w.write_str(r#"""#)?;
            w.write_str(">")?;
            let var_6 = "badge";
            w.write_str(var_6)?;
            w.write_str("</a>")?;
            Ok(())
        })
    }

    pub fn page(title: String, items: Vec<Item>, kind: u8, home: String) -> impl tempera::Component {
        tempera::component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            scope.rendered_css_classes();
            scope.rendered_scripts();
            w.write_str("<!doctype html>")?;
            w.write_str("<html>")?;
            w.write_str("<head>")?;
            w.write_str("<title>")?;
            w.write_str(&tempera::escape_string(&(title)))?;
            w.write_str("</title>")?;
            w.write_str("</head>")?;
            w.write_str("<body>")?;
            w.write_str("<a")?;
            w.write_str(r#" href=""#)?;
            let var_7 = tempera::SafeUrl::from((home).clone());
            w.write_str(&tempera::escape_string(&var_7))?;
            w.write_str(r#"""#)?;
            w.write_str(r#" data-kind="main""#)?;
            w.write_str(">")?;
            let var_8 = "Home";
            w.write_str(var_8)?;
            w.write_str("</a>")?;
            w.write_str("<p>")?;
            let var_9 = r###"say "# and "## too"###;
            w.write_str(var_9)?;
            w.write_str("</p>")?;
            w.write_str("<ul>")?;
            for item in items.iter().cloned() {
                tempera::Component::render_buffered(&(item_row(item)), scope, w)?;
            }
            w.write_str("</ul>")?;
            if items.is_empty() {
                w.write_str("<p>")?;
                let var_10 = "empty";
                w.write_str(var_10)?;
                w.write_str("</p>")?;
            } else {
                w.write_str("<p>")?;
                let var_11 = "some";
                w.write_str(var_11)?;
                w.write_str("</p>")?;
            }
            match kind {
                1 => {
                    w.write_str("<b>")?;
                    let var_12 = "one";
                    w.write_str(var_12)?;
                    w.write_str("</b>")?;
                }
                2 => {
                    w.write_str("<b>")?;
                    let var_13 = "two";
                    w.write_str(var_13)?;
                    w.write_str("</b>")?;
                }
                _ => {
                    w.write_str("<b>")?;
                    let var_14 = "many";
                    w.write_str(var_14)?;
                    w.write_str("</b>")?;
                }
            }
            w.write_str("<input")?;
            w.write_str(r#" type="text""#)?;
            if items.is_empty() {
                w.write_str(" disabled")?;
            }
            w.write_str(r#" value=""#)?;
            w.write_str(&tempera::escape_string(&(title)))?;
            w.write_str(r#"""#)?;
            w.write_str(">")?;
            w.write_str("<br>")?;
            w.write_str("</body>")?;
            w.write_str("</html>")?;
            Ok(())
        })
    }
}
