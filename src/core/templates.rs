//! Workflow template bodies.
//!
//! Placeholders (`{{key}}`) are resolved at generation time from the
//! configuration record. GitHub expressions (`${{ ... }}`) and shell
//! variables are passthrough text, resolved
//! when the workflow runs. Multi-line fragments substitute into a
//! placeholder sitting alone at column 0 and carry their own
//! indentation.

use crate::config::Target;

pub const DEPLOY_WORKFLOW: &str = r#"# Generated by deckhand. Do not edit by hand; re-run `deckhand generate`.
name: Deploy {{target}} ({{environment}})

on:
{{trigger}}

permissions:
  id-token: write
  contents: read

env:
  AWS_REGION: {{region}}
  ECR_REPOSITORY: {{repository}}

jobs:
  deploy:
    runs-on: ubuntu-latest
    environment: {{environment}}
    steps:
      - uses: actions/checkout@v4

      - name: Configure AWS credentials
        uses: aws-actions/configure-aws-credentials@v4
        with:
          role-to-assume: {{roleArn}}
          aws-region: {{region}}

      - name: Log in to Amazon ECR
        id: ecr
        uses: aws-actions/amazon-ecr-login@v2

      - name: Build and push image
        id: build
        env:
          REGISTRY: ${{ steps.ecr.outputs.registry }}
        run: |
          IMAGE_TAG="{{environment}}-{{target}}-{{revision}}"
          docker build -t "$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG" .
          docker tag "$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG" "$REGISTRY/$ECR_REPOSITORY:{{environment}}-{{target}}-latest"
          docker tag "$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG" "$REGISTRY/$ECR_REPOSITORY:{{environment}}-latest"
          docker push "$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG"
          docker push "$REGISTRY/$ECR_REPOSITORY:{{environment}}-{{target}}-latest"
          docker push "$REGISTRY/$ECR_REPOSITORY:{{environment}}-latest"
          echo "image_tag=$IMAGE_TAG" >> "$GITHUB_OUTPUT"

      - name: Deploy {{target}}
        env:
          REGISTRY: ${{ steps.ecr.outputs.registry }}
          IMAGE_TAG: ${{ steps.build.outputs.image_tag }}
        run: |
{{deployCommands}}
"#;

pub const TERRAFORM_PLAN_WORKFLOW: &str = r#"# Generated by deckhand. Do not edit by hand; re-run `deckhand generate`.
name: Terraform plan

on:
  pull_request:
    paths:
      - 'terraform/**'
  workflow_dispatch: {}

permissions:
  id-token: write
  contents: read

jobs:
  plan:
    runs-on: ubuntu-latest
    strategy:
      fail-fast: false
      matrix:
        include:
{{environments}}
    steps:
      - uses: actions/checkout@v4

      - uses: hashicorp/setup-terraform@v3

      - name: Configure AWS credentials
        uses: aws-actions/configure-aws-credentials@v4
        with:
          role-to-assume: ${{ matrix.role_arn }}
          aws-region: {{region}}

      - name: Plan
        working-directory: terraform
        run: |
          terraform init -input=false
          terraform plan -input=false -var "environment=${{ matrix.environment }}"
"#;

/// Automatic trigger for the dev variant.
pub const DEV_TRIGGER: &str = "  push:
    branches: [develop]";

/// Manual/release trigger for the prod variant.
pub const PROD_TRIGGER: &str = "  workflow_dispatch: {}
  release:
    types: [published]";

/// Deploy commands per target, indented for the `run: |` block. The
/// image reference always comes from the recorded build output, never
/// from re-deriving the tag.
pub fn deploy_commands(target: Target) -> &'static str {
    match target {
        Target::Lambda => {
            r#"          aws lambda update-function-code \
            --function-name "{{project}}-{{environment}}" \
            --image-uri "$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG""#
        }
        Target::AppRunner => {
            r#"          SERVICE_ARN="$(aws apprunner list-services \
            --query "ServiceSummaryList[?ServiceName=='{{project}}-{{environment}}'].ServiceArn" \
            --output text)"
          aws apprunner update-service \
            --service-arn "$SERVICE_ARN" \
            --source-configuration "ImageRepository={ImageIdentifier=$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG,ImageRepositoryType=ECR}""#
        }
        Target::Eks => {
            r#"          aws eks update-kubeconfig --name "{{project}}-{{environment}}" --region "{{region}}"
          kubectl set image "deployment/{{project}}" "{{project}}=$REGISTRY/$ECR_REPOSITORY:$IMAGE_TAG"
          kubectl rollout status "deployment/{{project}}" --timeout=300s"#
        }
    }
}

/// One matrix entry for the terraform plan workflow.
pub fn plan_matrix_entry(environment: &str, role_arn: &str) -> String {
    format!(
        "          - environment: {}\n            role_arn: {}",
        environment, role_arn
    )
}
