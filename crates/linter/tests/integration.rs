//! Integration tests for the force-destructure-props rule

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use props_linter::{apply_fixes, lint, Diagnostic};

fn run(source: &str) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
    assert!(ret.errors.is_empty(), "should parse:\n{source}");
    lint(source, &ret.program).diagnostics
}

fn flagged_text(source: &str) -> Vec<String> {
    run(source)
        .iter()
        .map(|d| source[d.start as usize..d.end as usize].to_string())
        .collect()
}

fn fix_once(source: &str) -> String {
    let diagnostics = run(source);
    assert_eq!(diagnostics.len(), 1, "expected one finding:\n{source}");
    apply_fixes(source, &diagnostics[0].fixes).expect("edits apply")
}

// ============================================================================
// Valid code
// ============================================================================

#[test]
fn test_valid_lowercase_functions() {
    assert!(run("function regularFunction({ param1, param2 }) { return param1 + param2; }").is_empty());
    assert!(run("const regularFunction = ({ param1, param2 }) => param1 + param2;").is_empty());
    assert!(run("const myFunction = ({ param }) => console.log(param);").is_empty());
    assert!(run("function renderRow({ id }) { return <tr key={id} />; }").is_empty());
}

#[test]
fn test_valid_callbacks() {
    let source = "
        const MyComponent = () => {
          const mutation = useAgentAssignAgent(({ id, assigneeId }) => ({
            clientCompanyId: id,
            requestBody: { agentId: assigneeId },
          }));
          return <div>Component</div>;
        };
    ";
    assert!(run(source).is_empty());

    let source = "
        const config = {
          mutation: useAgentAssignAgent(({ id, assigneeId }) => ({
            clientCompanyId: id,
            requestBody: { agentId: assigneeId },
          })),
          getIdFromRow: useCallback((row) => row['clientCompanyId'], []),
        };
    ";
    assert!(run(source).is_empty());
}

#[test]
fn test_valid_props_parameter() {
    let sources = [
        "function MyComponent(props) { const { name, age } = props; return <div>{name} is {age}</div>; }",
        "const MyComponent = (props) => { const { name, age } = props; return <div>{name}</div>; };",
        "const MyComponent = props => { const { name } = props; return <div>{name}</div>; };",
        "function MyComponent(props: Props) { const { name } = props; return <div>{name}</div>; }",
        "const MyComponent = (props: Props) => { const { name } = props; return <div>{name}</div>; };",
        "function MyComponent(props, ref) { const { name } = props; return <div ref={ref}>{name}</div>; }",
        "const MyComponent = props => <div>{props.name}</div>;",
    ];
    for source in sources {
        assert!(run(source).is_empty(), "should be clean:\n{source}");
    }
}

#[test]
fn test_valid_no_markup() {
    assert!(run("function NotAComponent({ param }) { return param; }").is_empty());
}

#[test]
fn test_valid_render_props() {
    let source = r#"
        <Controller
          name="password"
          control={control}
          render={({ field: { value, onChange }, fieldState: { invalid, error } }) => (
            <TextFieldWrapped
              value={value}
              onChange={onChange}
              type="password"
              error={invalid}
              helperText={error?.message}
            />
          )}
        />;
    "#;
    assert!(run(source).is_empty());

    let source = r#"
        <Field name="username">
          {({ field, form, meta }) => (
            <div>
              <input type="text" {...field} placeholder="Username" />
              {meta.touched && meta.error && <div className="error">{meta.error}</div>}
            </div>
          )}
        </Field>;
    "#;
    assert!(run(source).is_empty());

    assert!(run("<Mutation children={({ mutate }) => <button onClick={mutate} />} />;").is_empty());
    assert!(run("<Subscription>{({ data }) => <p>{data}</p>}</Subscription>;").is_empty());
}

// ============================================================================
// Invalid code
// ============================================================================

#[test]
fn test_invalid_basic_shapes() {
    assert_eq!(
        flagged_text("function MyComponent({ name, age }) { return <div>{name} is {age}</div>; }"),
        vec!["{ name, age }"]
    );
    assert_eq!(
        flagged_text("const MyComponent = ({ name, age }) => { return <div>{name}</div>; };"),
        vec!["{ name, age }"]
    );
    assert_eq!(
        flagged_text("const MyComponent = ({ name }: Props) => <div>{name}</div>;"),
        vec!["{ name }: Props"]
    );
}

#[test]
fn test_invalid_pattern_variants() {
    let sources = [
        "const MyComponent = ({ user: { name, age }, isVisible = true }) => { return isVisible ? <div>{name} is {age}</div> : null; };",
        "function MyComponent({ name = 'Anonymous', age = 0 }) { return <div>{name} is {age}</div>; }",
        "const MyComponent = ({ config: { theme, locale } }) => { return <div className={theme}>{locale}</div>; };",
        "function MyComponent({ name, ...restProps }) { return <div {...restProps}>{name}</div>; }",
        "const MyComponent = ({ name: displayName, age: userAge }) => { return <div>{displayName} is {userAge}</div>; };",
    ];
    for source in sources {
        assert_eq!(run(source).len(), 1, "should be flagged:\n{source}");
    }
}

#[test]
fn test_invalid_wrapped() {
    let sources = [
        "const MyComponent = memo(({ name }) => { return <div>{name}</div>; });",
        "const MyComponent = React.memo(({ name }) => { return <div>{name}</div>; });",
        "const MyComponent = forwardRef(({ name }, ref) => { return <div ref={ref}>{name}</div>; });",
        "const MyComponent = React.forwardRef(({ name }, ref) => { return <div ref={ref}>{name}</div>; });",
        "const MyComponent = memo(forwardRef(({ name }, ref) => <div ref={ref}>{name}</div>));",
        "export default memo(({ name }) => name);",
    ];
    for source in sources {
        assert_eq!(run(source).len(), 1, "should be flagged:\n{source}");
    }
}

#[test]
fn test_invalid_markup_in_nested_branches() {
    let source = "
        function ComplexComponent({ items, onItemClick, selectedId }) {
          if (!items.length) {
            return null;
          }
          return (
            <ul>
              {items.map(item => (
                <li key={item.id} onClick={() => onItemClick(item.id)}>
                  {item.id === selectedId ? <strong>{item.name}</strong> : item.name}
                </li>
              ))}
            </ul>
          );
        }
    ";
    assert_eq!(run(source).len(), 1);
}

// ============================================================================
// Fixes
// ============================================================================

#[test]
fn test_fix_expression_body() {
    assert_eq!(
        fix_once("const MyComponent = ({ name }) => <div>{name}</div>;"),
        "const MyComponent = (props) => { const { name } = props; return <div>{name}</div>; };"
    );
    assert_eq!(
        fix_once("const MyComponent = ({ name }: Props) => <div>{name}</div>;"),
        "const MyComponent = (props: Props) => { const { name } = props; return <div>{name}</div>; };"
    );
}

#[test]
fn test_fix_block_body_indented() {
    let source = "
        function MyComponent({ name, age }: Props) {
          return <div>{name} is {age} years old</div>;
        }
    ";
    assert_eq!(
        fix_once(source),
        "
        function MyComponent(props: Props) {
          const { name, age } = props;
          return <div>{name} is {age} years old</div>;
        }
    "
    );
}

#[test]
fn test_fix_multiline_markup_keeps_relative_indent() {
    let source = "
        const MyComponent = ({ title, subtitle }) => (
          <div>
            <h1>{title}</h1>
            <p>{subtitle}</p>
          </div>
        );
      ";
    assert_eq!(
        fix_once(source),
        "
        const MyComponent = (props) => {
          const { title, subtitle } = props;
          return (
            <div>
              <h1>{title}</h1>
              <p>{subtitle}</p>
            </div>
          );
        };
      "
    );
}

#[test]
fn test_unfixable_object_body() {
    let diagnostics = run("const MyComponent = ({ name }) => ({ children: <div>{name}</div> });");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].fixes.is_empty());
}

#[test]
fn test_unfixable_when_props_already_named() {
    let diagnostics = run("function MyComponent({ props, name }) { return <div {...props}>{name}</div>; }");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].fixes.is_empty());

    let source = "
        function Outer(props) {
          const Inner = ({ label }) => <span>{label}{props.suffix}</span>;
          return <Inner label={props.label} />;
        }
    ";
    let diagnostics = run(source);
    assert_eq!(flagged_text(source), vec!["{ label }"]);
    assert!(diagnostics[0].fixes.is_empty());
}

#[test]
fn test_fix_keeps_multiline_template_literal() {
    let source = "const MyComponent = ({ code }) => (\n  <pre>{`line one\n    line two`}{code}</pre>\n);";
    assert_eq!(
        fix_once(source),
        "const MyComponent = (props) => { const { code } = props; return (\n  <pre>{`line one\n    line two`}{code}</pre>\n); };"
    );
}
